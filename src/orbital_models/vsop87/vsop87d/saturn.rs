//! VSOP87D series for Saturn: heliocentric L, B, R on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const L0: &[Term] = &[
    [0.87401354029, 0.0, 0.0],
    [0.1110765978, 3.96205090194, 213.299095438],
    [0.01414150958, 4.58581515873, 7.1135470008],
    [0.00398379386, 0.52112025957, 206.1855484372],
    [0.00350769223, 3.30329903015, 426.598190876],
    [0.00206816296, 0.24658366938, 103.0927742186],
    [0.00079271288, 3.8400707853, 220.4126424388],
    [0.00023990338, 4.6697693486, 110.2063212194],
    [0.00016573583, 0.43719123541, 419.4846438752],
    [0.00014906995, 5.76903283845, 316.3918696566],
    [0.000158203, 0.9380895376, 632.7837393132],
    [0.00014609562, 1.56518573691, 3.9321532631],
    [0.00013160308, 4.44891180176, 14.2270940016],
    [0.00015053509, 2.71670027883, 639.897286314],
    [0.00013005305, 5.98119067061, 11.0457002639],
    [0.00010725066, 3.12939596466, 202.2533951741],
    [0.00005863207, 0.23657028777, 529.6909650946],
    [0.00005227771, 4.2078316238, 3.1813937377],
    [0.00006126308, 1.76328499656, 277.0349937414],
    [0.00005019658, 3.17787919533, 433.7117378768],
    [0.00004592541, 0.61976424374, 199.0720014364],
    [0.00004005862, 2.24479893937, 63.7358983034],
    [0.00002953815, 0.98280385206, 95.9792272178],
    [0.00003873696, 3.22282692566, 138.5174968707],
    [0.00002461172, 2.03163631205, 735.8765135318],
    [0.0000326949, 0.77491895787, 949.1756089698],
    [0.00001758143, 3.26580514774, 522.5774180938],
    [0.00001640183, 5.50504966218, 846.0828347512],
    [0.00001391336, 4.02331978116, 323.5054166574],
    [0.00001580641, 4.3726631412, 309.2783226558],
    [0.00001123515, 2.83726793572, 415.5524906121],
    [0.00001017258, 3.71698151814, 227.5261894396],
    [0.00000848643, 3.19149825839, 209.3669421749],
    [0.00001087237, 4.18343232481, 2.4476805548],
    [0.00000956752, 0.50740889886, 1265.5674786264],
    [0.00000789205, 5.00745123149, 0.9632078465],
    [0.00000686965, 1.74714407827, 1052.2683831884],
    [0.0000065447, 1.59889331515, 0.0481841098],
    [0.00000748811, 2.14398149298, 853.196381752],
    [0.0000063398, 2.29889903023, 412.3710968744],
    [0.00000743584, 5.25276954625, 224.3447957019],
    [0.00000852677, 3.42141350697, 175.1660598002],
    [0.00000579857, 3.09259007048, 74.7815985673],
    [0.00000624904, 0.97046831256, 210.1177017003],
    [0.00000529861, 4.44938897119, 117.3198682202],
    [0.00000542643, 1.51824320514, 9.5612275556],
    [0.00000474279, 5.47527185987, 742.9900605326],
    [0.00000448542, 1.28990416161, 127.4717966068],
    [0.00000546358, 2.12678554211, 350.3321196004],
    [0.00000478054, 2.96488054338, 137.0330241624],
    [0.00000354944, 3.0128648303, 838.9692877504],
    [0.00000451827, 1.04436664241, 490.3340891794],
    [0.00000347413, 1.53928227764, 340.7708920448],
    [0.00000343475, 0.24604039134, 0.5212648618],
    [0.00000309001, 3.49486734909, 216.4804891757],
    [0.00000322185, 0.96137456104, 203.7378678824],
    [0.00000372308, 2.27819108625, 217.2312487011],
    [0.00000321543, 2.57182354537, 647.0108333148],
    [0.00000330196, 0.24715617844, 1581.959348283],
    [0.00000249116, 1.47010534421, 1368.660252845],
    [0.00000286688, 2.37043745859, 351.8165923087],
    [0.00000220225, 4.20422424873, 200.7689224658],
    [0.00000277775, 0.40020408926, 211.8146227297],
    [0.000002045, 6.010822066, 265.9892934775],
    [0.00000207663, 0.48349820488, 1162.4747044078],
    [0.00000208655, 1.34516255304, 625.6701923124],
    [0.00000182454, 5.49122292426, 2.9207613068],
    [0.00000226609, 4.91003163138, 12.5301729722],
    [0.00000207659, 1.283022189, 39.3568759152],
    [0.00000173914, 1.86305806814, 0.7507595254],
    [0.0000018469, 3.50344404958, 149.5631971346],
    [0.00000183511, 0.97254952728, 4.192785694],
    [0.00000146068, 6.23102544071, 195.1398481733],
    [0.00000164541, 0.4400551752, 5.4166259714],
    [0.00000147526, 1.53529320509, 5.6290742925],
    [0.00000139666, 4.29450260069, 21.3406410024],
    [0.00000131283, 4.06828961903, 10.2949407385],
    [0.00000117283, 2.67920400584, 1155.361157407],
    [0.00000149299, 5.73594349789, 52.6901980395],
    [0.00000122373, 1.97588777199, 4.665866446],
    [0.00000113747, 5.59427544714, 1059.3819301892],
    [0.00000102702, 1.19748124058, 1685.0521225016],
    [0.00000118156, 5.340729339, 554.0699874828],
    [0.00000109275, 3.43812715686, 536.8045120954],
    [0.00000110399, 0.1660402409, 1.4844727083],
    [0.00000124969, 6.27737805832, 1898.3512179396],
    [0.00000089949, 5.80392934702, 114.1384744825],
    [0.00000103956, 2.19210363069, 88.865680217],
    [0.00000112437, 1.10502663534, 191.2076949102],
    [0.0000010657, 4.01156608514, 956.2891559706],
    [0.0000009143, 1.8752157751, 38.1330356378],
    [0.00000083791, 5.48810655641, 0.1118745846],
    [0.00000083461, 2.28972767279, 628.8515860501],
    [0.00000096987, 4.53666595763, 302.164775655],
    [0.00000100631, 4.96513666539, 269.9214467406],
    [0.00000075491, 2.18045274099, 728.762966531],
    [0.0000009633, 2.8331918921, 275.5505210331],
    [0.00000082363, 3.05469876064, 440.8252848776],
    [0.00000073888, 5.08914205084, 1375.7737998458],
    [0.00000071633, 5.1094074343, 65.2203710117],
    [0.00000070409, 4.86846451411, 0.2124483211],
    [0.0000006976, 3.71029022489, 14.977853527],
    [0.00000088772, 3.86334563977, 278.5194664497],
    [0.0000006809, 0.7341546099, 1478.8665740644],
    [0.00000066501, 0.02677580336, 70.8494453042],
    [0.00000065682, 2.02165559602, 142.4496501338],
    [0.00000075765, 1.61410487792, 284.1485407422],
    [0.00000063153, 3.49493353034, 479.2883889155],
    [0.00000062539, 2.58713611532, 422.6660376129],
    [0.00000069313, 3.43979731402, 515.463871093],
    [0.00000079021, 4.45154941586, 35.4247226521],
    [0.00000063664, 3.31749528708, 62.2514255951],
    [0.00000052939, 5.51392725227, 0.2606324309],
    [0.00000053011, 3.18480701697, 8.0767548473],
    [0.00000054492, 2.45674090515, 22.0914005278],
    [0.00000050514, 4.26749346978, 99.1606209555],
    [0.0000005517, 0.9679744615, 942.062061969],
    [0.00000049288, 2.38641424063, 1471.7530270636],
    [0.00000047199, 2.02515248245, 312.1990839626],
    [0.0000006108, 1.50295092063, 210.8514148832],
    [0.00000045126, 0.93109376473, 2001.4439921582],
    [0.00000060556, 2.68715551585, 388.4651552382],
    [0.00000043452, 2.52602011714, 288.0806940053],
    [0.00000042544, 3.81793980322, 330.6189636582],
    [0.00000039915, 5.713786529, 408.4389436113],
    [0.00000050145, 6.03164759907, 2214.7430875962],
    [0.0000004586, 0.54229721801, 212.3358875915],
    [0.00000054165, 0.78154835399, 191.9584544356],
    [0.00000047016, 4.59934671151, 437.6438911399],
    [0.00000042362, 1.90070070955, 430.5303441391],
    [0.00000039722, 1.63259419913, 1066.49547719],
    [0.00000036345, 0.84756992711, 213.3472795478],
    [0.00000035468, 4.18603772925, 215.7467759928],
    [0.00000036344, 3.93295730315, 213.2509113282],
    [0.00000038005, 0.31313803095, 423.4167971383],
    [0.00000044746, 1.12488341174, 6.1503391543],
    [0.00000037902, 1.19795851115, 2.7083129857],
    [0.00000043402, 1.37363944007, 563.6312150384],
    [0.00000043764, 3.93043802956, 525.4981794006],
    [0.00000034825, 1.01566605408, 203.0041546995],
    [0.00000031755, 1.69273634405, 0.1600586944],
    [0.0000003088, 6.13525703832, 417.0369633204],
    [0.00000036388, 6.00586032647, 18.1592472647],
    [0.00000029032, 1.19660544505, 404.5067903482],
    [0.00000032812, 0.53649479713, 107.0249274817],
    [0.00000030433, 0.72335287989, 222.8603229936],
    [0.00000032644, 0.81204701486, 1795.258443721],
    [0.00000037769, 3.69666903716, 1272.6810256272],
    [0.00000027679, 1.45663979401, 7.1617311106],
    [0.00000027187, 1.89731951902, 1045.1548361876],
    [0.00000037699, 4.51997049537, 24.3790223882],
    [0.00000034885, 4.46095761791, 214.2623032845],
    [0.0000003265, 0.66372395761, 692.5874843535],
    [0.00000030324, 5.30369950147, 33.9402499438],
    [0.0000002748, 6.22702216249, 1.2720243872],
    [0.00000026657, 4.56713198392, 7.065362891],
    [0.00000031745, 5.49798599565, 56.6223513026],
    [0.0000002805, 5.64447420566, 128.9562693151],
    [0.00000024277, 3.93966553574, 414.0680179038],
    [0.00000032017, 5.22260660455, 92.0470739547],
    [0.00000026976, 0.06705123981, 205.2223405907],
    [0.00000022974, 3.6581775177, 207.6700211455],
    [0.00000031775, 5.59198119173, 6069.7767545534],
    [0.00000023153, 2.10054506119, 1788.1448967202],
    [0.00000031025, 0.37190053329, 703.6331846174],
    [0.00000029376, 0.14742155778, 131.4039498699],
    [0.00000022562, 5.24009182383, 212.7778305762],
    [0.00000026185, 5.41311252822, 140.001969579],
    [0.00000025673, 4.36038885283, 32.2433289144],
    [0.00000020392, 2.8241390926, 429.7795846137],
    [0.00000020659, 0.67091805084, 2317.8358618148],
    [0.00000024397, 3.08740396398, 145.6310438715],
    [0.00000023735, 2.54365387567, 76.2660712756],
    [0.00000020157, 5.06708675157, 617.8058857862],
    [0.00000023307, 3.97357729211, 483.2205421786],
    [0.00000022878, 6.10452832642, 177.8743727859],
    [0.00000022978, 3.20140795404, 208.633228992],
    [0.00000020638, 5.22128727027, 6.592282139],
    [0.00000021446, 0.72034565528, 1258.4539316256],
    [0.00000018034, 6.11382719947, 210.3783341312],
    [0.0000002238, 5.92299908546, 173.9422195228],
    [0.00000019128, 5.77772013766, 213.8203602998],
    [0.00000020871, 5.79126331864, 2531.1349572528],
    [0.00000019327, 1.64147367403, 565.1156877467],
    [0.00000016806, 3.27953583323, 98.8999885246],
    [0.00000020833, 2.01655935909, 860.3099287528],
    [0.00000017939, 3.14329498012, 831.8557407496],
    [0.00000015653, 3.10137669623, 106.2741679563],
    [0.00000018235, 5.22595172482, 73.297125859],
    [0.00000019302, 5.9394711405, 425.1137181677],
    [0.00000014514, 2.75049388379, 1.2238402774],
    [0.00000014562, 5.18795088579, 305.3461693927],
    [0.00000014254, 3.88079504939, 54.1746707478],
    [0.00000014594, 3.25016810034, 78.7137518304],
    [0.00000013637, 2.55486219141, 405.2575498736],
    [0.00000013914, 1.72356993808, 69.1525242748],
    [0.00000013689, 2.37430586272, 125.9873238985],
    [0.00000013496, 0.82683590985, 99.9113804809],
    [0.00000018483, 0.73171264866, 9999.986450773],
    [0.00000013542, 3.58584380924, 234.6397364404],
    [0.00000013741, 6.18458356845, 245.5424243524],
    [0.00000016944, 0.72200792996, 2111.6503133776],
    [0.00000017441, 0.23803796878, 134.5853436076],
    [0.00000014181, 4.51963935804, 59.8037450403],
    [0.00000013598, 2.53776983965, 1.6969210294],
    [0.0000001224, 2.11973445754, 28.3111756513],
    [0.00000011988, 1.62114832786, 1361.5467058442],
    [0.00000011974, 4.0737873512, 280.9671470045],
    [0.00000012758, 5.31146919749, 344.7030453079],
    [0.00000016051, 3.97093160336, 355.7487455718],
    [0.00000011427, 5.51123470805, 192.6921676185],
    [0.00000013133, 4.69168003518, 767.3690829208],
    [0.00000014746, 3.28998910617, 1589.0728952838],
    [0.00000011417, 1.81615681635, 2104.5367663768],
    [0.00000011626, 2.79410384978, 362.8622925726],
    [0.00000013234, 4.16642914717, 225.8292684102],
    [0.00000010599, 5.50554288376, 199.2844497575],
    [0.00000010558, 3.57501718639, 1.4362885985],
    [0.00000010485, 2.84462532686, 85.8272988312],
    [0.00000010296, 0.22225264071, 198.321241911],
    [0.00000010552, 0.18716643576, 217.491881132],
    [0.00000011853, 0.11584857323, 7.6348118626],
    [0.00000010248, 0.2190415417, 144.1465711632],
    [0.00000010403, 1.68776321208, 31.019488637],
    [0.00000010313, 4.72132701805, 216.2198567448],
    [0.00000010719, 2.60869377832, 339.2864193365],
    [0.00000009636, 3.66746262954, 212.5483359126],
    [0.00000009631, 3.34275630477, 223.5940361765],
    [0.00000009684, 0.41556436593, 2634.2277314714],
    [0.00000009885, 4.01798130416, 207.1487562837],
    [0.00000013212, 6.00683506785, 214.7835681463],
    [0.00000011346, 2.61898383052, 7.8643065262],
    [0.00000009158, 5.39855118256, 342.2553647531],
    [0.00000011882, 4.00188476744, 267.4737661858],
    [0.00000012054, 3.59904816676, 124.433415221],
    [0.00000008921, 4.22716773496, 6.3627874754],
    [0.00000010142, 3.60807025662, 14.0146456805],
    [0.0000000935, 0.72255756005, 347.8844390456],
    [0.00000010529, 2.36779614951, 831.1049812242],
    [0.00000008587, 4.48439552745, 1692.1656695024],
    [0.00000010142, 3.93620624488, 207.8824694666],
    [0.00000009147, 4.28032835242, 312.4597163935],
    [0.00000008088, 0.81225752596, 264.5048207692],
    [0.00000009241, 4.26402650779, 20.6069278195],
    [0.00000009614, 0.64291347187, 218.9281697305],
    [0.00000008537, 0.48756672382, 1574.8458012822],
    [0.00000007986, 4.71088791079, 333.657345044],
    [0.00000008951, 0.90641577433, 497.4476361802],
    [0.00000007959, 2.73277594136, 4.1446015842],
    [0.00000009133, 5.08250578843, 241.6102710893],
    [0.00000009669, 1.60623316904, 0.8937718773],
    [0.00000008883, 5.55491009279, 2847.5268269094],
    [0.00000008926, 5.80857835271, 329.7251917809],
    [0.00000007226, 0.60164771281, 206.233732547],
    [0.00000007655, 5.53676341721, 116.4260963429],
    [0.00000007118, 0.18747501525, 209.106309744],
    [0.00000007507, 5.43555636173, 621.7380390493],
    [0.00000008885, 5.36210591059, 343.2185725996],
    [0.00000007056, 0.41911130648, 756.3233826569],
    [0.00000008124, 4.05571025939, 237.6781178262],
    [0.00000008964, 1.6502392713, 210.3301500214],
    [0.00000006961, 3.17855200943, 543.0242872189],
    [0.00000008916, 0.56503620503, 2428.0421830342],
    [0.00000006926, 3.66869171435, 247.2393453818],
    [0.00000008982, 4.25046722481, 46.470422916],
    [0.00000007089, 5.14399672225, 231.4583427027],
    [0.00000007381, 1.25092810119, 217.964961884],
    [0.00000007134, 2.83090354854, 1148.2476104062],
    [0.00000006353, 0.82582711056, 31.492569389],
    [0.00000007558, 5.62617378543, 518.6452648307],
    [0.00000006383, 3.54809945181, 244.318584075],
    [0.00000006914, 3.70012837706, 206.1373643274],
    [0.00000006286, 5.79144749096, 179.3588454942],
    [0.00000006639, 4.55197585824, 120.358249606],
    [0.00000005823, 1.40737990571, 214.0498549634],
    [0.0000000585, 4.86725483749, 320.3240229197],
    [0.00000006213, 1.07959478499, 251.4321310758],
    [0.0000000773, 3.82244175824, 380.12776796],
    [0.00000005716, 1.34909972549, 1677.9385755008],
    [0.00000006469, 1.34776801494, 188.9200730498],
    [0.00000005668, 2.28643368177, 20.4468691251],
    [0.00000006092, 3.62275289839, 1169.5882514086],
    [0.00000005711, 0.51687421521, 148.0787244263],
    [0.00000005804, 1.54831552984, 2420.9286360334],
    [0.00000005703, 5.0599348323, 2.9689454166],
    [0.00000005913, 1.66225477547, 842.1506814881],
    [0.00000007449, 1.36195943673, 166.828672522],
    [0.00000006482, 1.94032041024, 357.4456666012],
    [0.00000006368, 2.44556930837, 654.1243803156],
    [0.00000006327, 0.40654591365, 168.0525127994],
    [0.00000005573, 2.69383455663, 750.1036075334],
    [0.00000007216, 2.22547711392, 488.8496164711],
    [0.00000006701, 6.03737590382, 160.6088973985],
    [0.00000006938, 5.7836203441, 700.6642392008],
    [0.00000006701, 3.14738404371, 491.8185618877],
    [0.00000005684, 2.59531540359, 1.6445314027],
    [0.000000049, 2.03902856851, 0.8031491521],
    [0.00000005147, 4.10182033298, 196.6243208816],
    [0.00000004985, 2.96765983996, 258.8757464767],
    [0.00000005911, 1.81507526918, 252.6559713532],
    [0.00000006056, 3.33431010543, 182.279606801],
    [0.00000006195, 5.01900871714, 273.1028404783],
    [0.00000006316, 5.49053160191, 206.706813299],
    [0.00000005529, 3.31498938717, 1905.4647649404],
    [0.00000005102, 3.9817145361, 254.9435932136],
    [0.00000004762, 2.24463685255, 635.9651330509],
    [0.00000005213, 0.53609344278, 135.5485514541],
    [0.00000004639, 0.04466373027, 213.1872208534],
    [0.00000005951, 0.5456548749, 51.2057253312],
    [0.00000004535, 0.16088614438, 2950.619601128],
    [0.00000004639, 4.73769153591, 213.4109700226],
    [0.00000004716, 3.13636467789, 28.5718080822],
    [0.00000004748, 1.12156952989, 6.2197751235],
    [0.00000005735, 0.04425142145, 348.8476468921],
    [0.00000004334, 2.68814219154, 81.7521332162],
    [0.00000004538, 3.83676888638, 487.3651437628],
    [0.00000005582, 3.63486861028, 248.7238180901],
    [0.00000004106, 3.39164360376, 50.4025761791],
    [0.00000005657, 3.59967787362, 282.4516197128],
    [0.00000005145, 1.33329458239, 173.6815870919],
    [0.00000003898, 4.11804949361, 213.5115437591],
    [0.00000003898, 0.66430577257, 213.0866471169],
    [0.00000004418, 0.10784811796, 905.8865797915],
    [0.00000004935, 2.19060382431, 189.7232222019],
    [0.00000003799, 2.60752583205, 546.956440482],
    [0.0000000396, 1.6033988901, 218.7157214094],
    [0.0000000374, 3.30724497407, 274.0660483248],
    [0.00000003778, 0.26606330942, 636.7158925763],
    [0.00000004657, 0.37532078548, 2744.4340526908],
    [0.00000003682, 5.11587898667, 458.8415197904],
    [0.0000000423, 5.18313062329, 27.0873353739],
    [0.00000005181, 3.75590784411, 3127.3133312618],
    [0.00000003904, 2.21738744557, 358.9301393095],
    [0.00000004784, 4.60666675927, 72.0732855816],
    [0.00000003552, 3.23789349146, 543.9180590962],
    [0.00000003502, 3.68869576093, 41.6444977756],
    [0.00000004803, 4.73553427126, 240.3864308119],
    [0.00000003768, 3.86077796242, 2008.557539159],
    [0.0000000368, 5.36657425183, 10.0343083076],
    [0.00000004298, 3.15595944154, 738.7972748386],
    [0.00000003388, 0.73176365772, 11.3063326948],
    [0.00000003507, 2.62508475661, 13.3333221243],
    [0.00000003552, 0.28967392251, 1891.2376709388],
    [0.00000003604, 4.6932409048, 295.0512286542],
    [0.00000003621, 6.25264336426, 129.9194771616],
    [0.00000003334, 5.04221806054, 153.4953503977],
    [0.00000003837, 5.31732096284, 3163.918696566],
    [0.00000003281, 5.59031570352, 2.0057375701],
    [0.00000004042, 2.3708130809, 176.6505325085],
    [0.000000035, 2.5474426836, 1464.6394800628],
    [0.00000004144, 5.46982520458, 6.9010986797],
    [0.00000003691, 4.07518441665, 969.6224780949],
    [0.00000003947, 4.27108449197, 181.806526049],
    [0.00000003867, 5.4864338631, 37.8724032069],
    [0.00000003339, 6.05372370584, 9.4011688612],
    [0.00000003484, 5.81097824751, 13.4933808187],
    [0.00000003033, 2.38897886651, 221.3758502853],
    [0.0000000299, 4.13995939326, 66.70484372],
    [0.00000003746, 5.29902286106, 561.1835344836],
    [0.00000003233, 4.27743802321, 593.426863398],
    [0.0000000317, 1.7540047777, 235.3904959658],
    [0.00000004114, 2.01006788412, 601.7642506762],
    [0.00000002937, 4.76351448561, 213.5597278689],
    [0.00000002932, 1.83671373509, 501.3797894433],
    [0.00000002937, 0.01884528825, 213.0384630071],
    [0.00000003268, 4.44653949711, 60.7669528868],
    [0.00000003608, 0.14307251176, 552.5855147745],
    [0.00000002947, 0.74753671556, 17.5261078183],
    [0.00000003979, 0.76931722276, 424.1505103212],
    [0.00000002803, 1.07518176128, 1994.3304451574],
    [0.00000002905, 1.27201007426, 2737.32050569],
    [0.0000000361, 0.22394084, 121.2520214833],
    [0.00000002846, 5.11748545179, 205.6642835754],
    [0.00000003156, 2.74955723696, 494.2662424425],
    [0.00000003576, 4.49826302447, 167.0893049529],
    [0.00000002746, 0.66908290712, 7.0016724162],
    [0.0000000278, 2.10066625279, 894.8408795276],
    [0.00000002875, 2.39009721774, 151.0476698429],
    [0.0000000302, 0.2547582689, 40.8413486235],
    [0.00000002731, 3.74814908509, 429.0458714308],
    [0.00000002793, 4.1793883723, 292.0128472684],
    [0.00000002706, 5.34438894925, 327.4375699205],
    [0.00000002965, 0.61653881148, 643.8294395771],
    [0.00000002616, 4.8190138756, 681.5417840896],
    [0.00000002548, 3.7816258082, 1485.9801210652],
    [0.00000003483, 5.76091147029, 141.2258098564],
    [0.00000003257, 0.75722680616, 555.5544601911],
    [0.00000002887, 6.15899159727, 425.6349830295],
    [0.0000000245, 1.29619859767, 193.655375465],
    [0.00000003401, 2.48137843009, 43.2890291783],
    [0.00000003208, 0.6600284234, 776.9303104764],
    [0.00000002435, 4.58097103726, 477.8039162072],
    [0.00000002577, 1.41538858001, 100.6450936638],
    [0.000000026, 3.73139519973, 17.4084877393],
    [0.00000002428, 1.04400815278, 1279.794572628],
    [0.00000002569, 5.36004101928, 7.2254215854],
    [0.00000002844, 2.4722876765, 280.003939158],
    [0.00000002847, 1.52706408796, 17.2654753874],
    [0.00000002461, 2.73899140465, 172.2452984934],
    [0.00000003228, 4.10258705369, 618.5566453116],
    [0.00000002288, 0.18365494079, 426.6463749858],
    [0.00000002952, 3.97748947007, 650.9429865779],
    [0.00000002653, 0.14255829255, 162.8965192589],
    [0.00000002291, 3.26940117011, 426.5500067662],
    [0.00000003118, 2.80941831445, 2221.856634597],
    [0.00000002343, 4.24349768377, 113.3877149571],
    [0.0000000278, 4.36271946528, 130.4407420234],
    [0.00000002539, 5.58396427573, 381.3516082374],
    [0.00000002673, 2.74210116623, 45.5766510387],
    [0.00000003017, 3.7220807074, 228.276948965],
    [0.00000002781, 0.36312756349, 8.5980197091],
    [0.00000002377, 4.49193242045, 25.1297819136],
    [0.0000000214, 5.43424670725, 630.3360587584],
    [0.00000002456, 1.71617205116, 313.6835566709],
    [0.00000002071, 2.40453395841, 16.4623262353],
    [0.0000000205, 6.19704773331, 3267.0114707846],
    [0.00000002764, 0.40107063007, 219.4494345923],
    [0.00000002307, 2.61462153778, 26.826702943],
    [0.0000000265, 0.05892373791, 5856.4776591154],
    [0.00000001974, 2.15890150781, 746.9222137957],
    [0.00000001949, 3.13157993205, 226.6324175623],
    [0.00000002063, 0.75916097286, 472.1748419147],
    [0.00000002172, 1.41622302638, 23.5758732361],
    [0.00000002378, 3.45446288811, 241.8709035202],
    [0.00000002314, 2.92766120608, 170.7608257851],
    [0.00000002409, 1.55291842382, 112.6540017742],
    [0.00000002092, 4.33481587531, 210.5907824523],
    [0.00000001883, 4.75777119721, 115.6229471908],
    [0.00000001963, 5.63940648232, 454.9093665273],
    [0.00000001871, 2.14579836453, 135.336103133],
    [0.00000002304, 0.11816226543, 3060.8259223474],
    [0.00000002221, 4.34506511014, 556.5176680376],
    [0.00000001867, 5.70943358261, 19.1224551112],
    [0.00000002269, 3.36100653157, 696.5196376166],
    [0.00000002127, 0.4475492931, 216.0074084237],
    [0.00000001807, 6.1542731617, 5.8415226136],
    [0.00000002213, 3.42223891884, 533.6231183577],
    [0.00000001866, 3.90535444843, 220.364458329],
    [0.00000001767, 0.94232357739, 213.4591541324],
    [0.00000001767, 3.84003619647, 213.1390367436],
    [0.0000000191, 3.72504487558, 104.0559820651],
    [0.0000000175, 0.82378244287, 220.4608265486],
    [0.00000001838, 0.06310147657, 436.1594184316],
    [0.00000002146, 4.41415180481, 184.0941479094],
    [0.0000000173, 2.21039276178, 416.3032501375],
    [0.00000001715, 0.26601715797, 103.1409583284],
    [0.0000000171, 0.6351540758, 181.0557665236],
    [0.00000002307, 3.29544714308, 569.0478410098],
    [0.00000001906, 5.30639447218, 405.9912630565],
    [0.00000001863, 4.68613642432, 286.596221297],
    [0.00000001873, 2.26516020863, 1781.0313497194],
    [0.00000002035, 3.85188859267, 672.1406152284],
    [0.00000002236, 3.01959133214, 105.5404547734],
    [0.00000001767, 1.45800271562, 16.6747745564],
    [0.00000001633, 0.16030477876, 18.9100067901],
    [0.00000002116, 2.90186702031, 486.4019359163],
    [0.00000002202, 3.88125957017, 427.5613987225],
    [0.00000001706, 3.35213628354, 103.0445901088],
    [0.00000001604, 2.48973273967, 55.6591434561],
    [0.00000001744, 1.83791106739, 1044.4040766622],
    [0.00000001569, 6.10089581118, 106.0135355254],
    [0.00000002081, 6.03810192844, 916.9322800554],
    [0.00000001799, 5.01592570405, 731.9443602687],
    [0.00000001737, 1.49651330833, 25.8634950965],
    [0.00000001695, 3.53314158403, 627.3671133418],
    [0.00000001543, 0.81384993001, 2310.722314814],
    [0.00000001896, 3.38169845451, 2324.9494088156],
    [0.00000001926, 4.66519027283, 353.301065017],
    [0.00000001765, 5.14740716994, 107.2855599126],
    [0.00000001556, 1.12431826916, 230.8252032563],
    [0.00000001843, 0.02435960281, 102.1295663721],
    [0.00000001501, 4.18415120927, 194.1766403268],
    [0.00000001528, 1.00328674046, 3053.7123753466],
    [0.00000001529, 5.58893570479, 212.0270710508],
    [0.00000001684, 5.08547245125, 3480.3105662226],
    [0.00000001461, 2.31020597821, 721.6494195302],
    [0.0000000148, 5.34331643017, 418.5214360287],
    [0.00000001601, 5.53623000915, 391.1734682239],
    [0.00000001893, 3.62340803433, 204.7010757289],
    [0.00000001529, 6.06535432009, 77.962992305],
    [0.00000001529, 5.47660937625, 214.5711198252],
    [0.00000001552, 2.06693539836, 36.6485629295],
    [0.00000001453, 6.04709831442, 165.6048322446],
    [0.00000001393, 2.2825336906, 403.0223176399],
    [0.00000001444, 2.90650214018, 447.9388318784],
    [0.00000001924, 1.37028714759, 468.2426886516],
    [0.00000001426, 0.13255011458, 2207.6295405954],
    [0.00000001389, 2.21739183113, 643.0786800517],
    [0.00000001365, 1.63853880518, 629.6023455755],
    [0.00000001362, 3.35131049142, 93.531546663],
    [0.00000001376, 5.3698953845, 180.1619946463],
    [0.00000001584, 0.85642767335, 271.4059194489],
    [0.00000001405, 5.69231057947, 25.2727942655],
    [0.00000001681, 5.30308110734, 835.0371344873],
    [0.00000001598, 3.04233449432, 42.5382696529],
    [0.00000001759, 3.5904306694, 508.3503240922],
    [0.00000001394, 4.5507086329, 426.0769260142],
    [0.00000001314, 1.81147178081, 1382.8873468466],
    [0.00000001281, 4.2650838804, 123.5396433437],
    [0.00000001742, 5.71133189432, 22.8945496799],
    [0.00000001483, 1.84687831602, 289.5651667136],
    [0.00000001257, 3.01131200921, 409.9234163196],
    [0.00000001285, 4.41168551011, 558.0021407459],
    [0.00000001355, 3.87115897452, 1802.3719907218],
    [0.00000001333, 0.08474224795, 411.620337349],
    [0.00000001235, 4.08060394635, 28.4541880032],
    [0.00000001373, 5.06955106471, 427.1194557378],
    [0.00000001565, 2.32953532704, 41.0537969446],
    [0.00000001656, 6.06169130804, 268.4369740323],
    [0.00000001212, 3.05966957556, 420.9691165835],
    [0.00000001238, 5.25936700679, 412.5835451955],
    [0.0000000122, 3.92987038126, 2.6601288759],
    [0.00000001552, 1.48184004773, 9786.687355335],
    [0.0000000124, 1.46716327302, 291.262087743],
    [0.00000001133, 5.39046583617, 423.6774295692],
    [0.00000001319, 5.79905891015, 1108.1399749656],
    [0.00000001329, 0.92291650117, 778.4147831847],
    [0.00000001399, 2.55906860098, 421.93232443],
    [0.0000000112, 3.86777259232, 1033.3583763983],
    [0.00000001164, 4.10048660918, 685.4739373527],
    [0.00000001321, 1.45843550806, 1073.6090241908],
    [0.00000001313, 0.11761534168, 71.8126531507],
    [0.00000001438, 2.57741975416, 100.3844612329],
    [0.0000000119, 5.63379509659, 5.1078094307],
    [0.00000001289, 5.20604565993, 278.2588340188],
    [0.00000001157, 5.00101860101, 230.5645708254],
    [0.00000001233, 2.70207317014, 282.6640680339],
    [0.00000001209, 4.02230498135, 980.6681783588],
    [0.0000000107, 5.17569455055, 313.2104759189],
    [0.00000001292, 4.30946655209, 219.891377577],
    [0.00000001399, 2.58476795858, 2538.2485042536],
    [0.00000001038, 0.1421219968, 820.0592809603],
    [0.00000001245, 4.0827889713, 525.7588118315],
    [0.00000001254, 2.46275017735, 457.617679513],
    [0.00000001021, 1.11239421009, 69.3649725959],
    [0.00000001009, 1.01709171385, 143.9341228421],
    [0.00000001075, 2.39196853318, 48.7580447764],
    [0.0000000118, 6.18938910429, 3377.217792004],
    [0.00000000989, 5.94928603657, 3583.4033404412],
    [0.00000000972, 4.25434114756, 397.3932433474],
    [0.00000000983, 0.04442608551, 140.9651774255],
    [0.00000000972, 5.67683107883, 422.405405182],
    [0.00000001298, 1.34524469231, 875.830299001],
    [0.0000000119, 0.67933974618, 699.7010313543],
    [0.0000000095, 2.669643407, 92.3077063856],
    [0.00000000933, 0.6300065658, 406.954470903],
    [0.00000000959, 1.77556884452, 67.6680515665],
    [0.00000001185, 3.70140604185, 285.6330134505],
    [0.00000000956, 5.18928530992, 319.3126309634],
    [0.00000001014, 1.97449310063, 2097.423219376],
    [0.00000001048, 3.69659410655, 117.9105690512],
    [0.00000001153, 2.53320305623, 104.5772469269],
    [0.00000001258, 2.51536062507, 694.0719570618],
    [0.00000000971, 5.19147635849, 240.125798381],
    [0.0000000094, 3.94701776697, 35.212274331],
    [0.00000001047, 6.1236097946, 238.9019581036],
    [0.00000001185, 5.28289734361, 638.4128136057],
    [0.00000000893, 0.95364488395, 14.8177948326],
    [0.00000001094, 3.9300967924, 945.2434557067],
    [0.00000000949, 3.46451925897, 443.8636662634],
    [0.00000001002, 3.18639902867, 337.732510659],
    [0.00000001017, 2.87111101661, 211.6021744086],
    [0.00000000875, 0.58638080067, 2.2876218604],
    [0.00000000925, 1.54981519784, 19.643719973],
    [0.00000001152, 1.6852860859, 691.1030116452],
    [0.00000000832, 2.64637256467, 436.8931316145],
    [0.00000000834, 3.8891352157, 331.2096644892],
    [0.00000000825, 2.1543787221, 739.8086667949],
    [0.00000000848, 3.182632391, 196.0336200506],
    [0.00000001044, 3.87842686803, 532.6117264014],
    [0.00000000846, 5.38853773752, 97.6761482472],
    [0.00000001021, 2.93075488512, 184.9879197867],
    [0.00000000843, 6.12012061227, 616.3214130779],
    [0.0000000082, 1.01380400969, 480.7728616238],
    [0.00000000842, 3.56523575381, 421.1815649046],
    [0.00000001076, 3.28234305253, 5.6772584023],
    [0.00000000808, 2.78227865672, 212.0752551606],
    [0.00000000812, 0.94281737163, 108.7218485111],
    [0.00000000808, 2.21202653278, 610.6923387854],
    [0.00000000808, 2.00008111713, 214.5229357154],
    [0.00000000875, 2.14897461363, 114.3991069134],
    [0.00000000791, 2.35474255596, 1.3725981237],
    [0.0000000096, 0.25496742364, 710.7467316182],
    [0.00000001001, 2.34471240227, 16.04163511],
    [0.00000000994, 0.63700664871, 84.9335269539],
    [0.00000000985, 2.63664920104, 395.578702239],
    [0.00000000874, 2.59112594967, 418.0001711669],
    [0.00000000758, 0.58117487362, 2627.1141844706],
    [0.00000000894, 1.48976897396, 760.25553592],
    [0.00000000768, 5.25095392845, 305.0855369618],
    [0.0000000102, 2.73153988233, 268.9582388941],
    [0.00000000903, 0.13224671457, 238.4288773516],
    [0.0000000075, 0.76128043194, 724.8308132679],
    [0.00000000903, 3.3710532337, 526.5095713569],
    [0.0000000093, 2.8362259411, 2641.3412784722],
    [0.00000000808, 5.23759255053, 216.2680408546],
    [0.00000000864, 1.22059443823, 570.7447620392],
    [0.00000000798, 3.72388187653, 124.5028511902],
    [0.00000000753, 0.72747041757, 3370.1042450032],
    [0.00000000844, 2.0325176781, 511.5317178299],
    [0.00000000827, 4.49936223096, 444.7574381407],
    [0.00000000848, 3.74330244183, 2118.7638603784],
    [0.00000000795, 0.27939057139, 101.8689339412],
    [0.00000000754, 5.68583497533, 662.531203563],
    [0.0000000075, 4.78778128003, 102.5715093568],
    [0.00000000709, 1.64518562815, 159.1244246902],
    [0.0000000077, 4.0240499195, 909.8187330546],
    [0.00000000765, 1.62693133597, 465.9550667912],
    [0.00000000911, 5.04635658282, 913.9633346388],
    [0.00000000861, 2.78971410809, 495.7507151508],
    [0.00000000688, 1.10207467005, 1.536862335],
    [0.00000000803, 4.3304391909, 453.424893819],
    [0.00000000673, 0.03439333853, 2524.021410252],
    [0.00000000856, 3.50639182375, 439.1283638482],
    [0.00000000684, 3.93906807606, 337.8019466282],
    [0.00000000716, 6.18909854987, 310.7146112543],
    [0.00000000922, 1.7063420032, 125.1841747464],
    [0.00000000885, 1.69955870744, 6283.0758499914],
    [0.00000000656, 1.28102954508, 432.0148168474],
    [0.00000000808, 1.64410808383, 299.1263942692],
    [0.00000000656, 1.4944916462, 849.2642284889],
    [0.00000000679, 4.0296298449, 429.5189521828],
    [0.00000000854, 3.04068731741, 298.2326223919],
    [0.00000000676, 2.17631477883, 576.1613880106],
    [0.00000000881, 5.47733557925, 220.9339073006],
    [0.00000000739, 5.85330901725, 938.1299087059],
    [0.00000000637, 2.96294462433, 425.8474313506],
    [0.00000000665, 1.62998758015, 221.1634019642],
    [0.00000000693, 3.538716976, 1182.9215735329],
    [0.00000000659, 1.85319023888, 72.3339180125],
    [0.00000000631, 2.01234919422, 58.1068240109],
    [0.00000000806, 5.21763933753, 428.0826635843],
    [0.00000000804, 5.94281804567, 26.0235537909],
    [0.00000000679, 2.1178446094, 256.4280659219],
    [0.00000000692, 1.88791537515, 214.9960164674],
    [0.00000000731, 1.95762888351, 19.0105805266],
    [0.00000000786, 0.91252523635, 518.3846323998],
    [0.00000000684, 4.89288171806, 3796.7024358792],
    [0.00000000612, 2.08511492036, 1038.0412891868],
    [0.00000000598, 3.48814927085, 219.6618829134],
    [0.00000000828, 0.316894722, 25.6028626656],
    [0.00000000773, 4.57524006328, 624.919432787],
    [0.00000000775, 6.12920077021, 432.2272651685],
    [0.0000000082, 4.1132032613, 141.4864422873],
    [0.00000000588, 1.95775535412, 211.8628068395],
    [0.00000000661, 5.30100397707, 103.6140390804],
    [0.00000000588, 2.82460441973, 214.7353840365],
    [0.00000000651, 5.56732715834, 393.4610900843],
    [0.00000000564, 4.01666572198, 850.0149880143],
    [0.00000000657, 2.58166087726, 526.9826521089],
    [0.00000000722, 0.6849421948, 953.1077622329],
    [0.00000000592, 2.3719066249, 205.4347889118],
    [0.00000000738, 1.07981019512, 239.1625905345],
    [0.0000000059, 6.03587790219, 188.0263011725],
    [0.00000000559, 5.76010635813, 430.79097657],
    [0.00000000535, 5.80499883199, 100.1720129118],
    [0.00000000611, 5.954393601, 3693.6096616606],
    [0.00000000591, 4.22379888536, 505.3119427064],
    [0.00000000691, 2.96568305933, 606.7601855223],
    [0.00000000648, 2.33387623043, 30.7588562061],
    [0.00000000544, 2.21686115865, 92.7978334801],
    [0.00000000517, 2.68282421083, 262.0571402144],
    [0.00000000563, 1.69735688719, 2413.8150890326],
    [0.00000000569, 2.85075508949, 227.3137411185],
    [0.00000000531, 2.17713708433, 263.0203480609],
    [0.00000000504, 4.44947885193, 343.7398374614],
    [0.00000000578, 3.31462999801, 33.7278016227],
    [0.00000000619, 1.83409636127, 867.4234757536],
    [0.00000000546, 4.82201187196, 1048.3362299253],
    [0.00000000517, 1.42016110098, 1246.6574718363],
    [0.00000000681, 1.94124532036, 25874.6040461362],
    [0.00000000551, 5.70617358907, 1119.1856752295],
    [0.00000000523, 5.78878978812, 366.7944458357],
    [0.00000000486, 1.90063955671, 1063.3140834523],
    [0.00000000552, 3.64325031166, 256.5881246163],
    [0.00000000612, 2.39349965241, 2854.6403739102],
    [0.00000000495, 3.4683358124, 597.3590166611],
    [0.00000000622, 1.86539391351, 524.0137066923],
    [0.0000000048, 5.33557742428, 29.2049475286],
    [0.00000000492, 4.64109549618, 384.0599212231],
    [0.0000000052, 2.32171681836, 2957.7331481288],
    [0.00000000545, 0.5327477871, 431.264057322],
    [0.00000000479, 2.1332517724, 319.5732633943],
    [0.00000000526, 4.17771910249, 136.0698163159],
    [0.00000000612, 4.56148986681, 774.4826299216],
    [0.00000000642, 3.25195912708, 67.8804998876],
    [0.00000000527, 4.00299045889, 2435.155730035],
    [0.00000000524, 4.69817741494, 336.8387387817],
    [0.00000000495, 5.95703962647, 765.8846102125],
    [0.00000000463, 6.097803226, 54.3347294422],
    [0.00000000538, 0.22116216124, 450.9772132642],
    [0.00000000465, 1.87487942848, 958.576777831],
    [0.000000005, 1.54084756342, 572.2292347475],
    [0.00000000528, 3.54764543325, 233.9060232575],
    [0.00000000451, 5.72664397006, 3899.7952100978],
    [0.00000000514, 5.00509609437, 273.8536000037],
    [0.00000000471, 2.96871670899, 306.830642101],
    [0.00000000447, 1.87279400375, 62.038977274],
    [0.00000000456, 5.4552199852, 1171.875873269],
    [0.00000000499, 1.9282177853, 217.4436970222],
    [0.00000000548, 3.21873307934, 824.7421937488],
    [0.00000000579, 2.29424247924, 810.6581120991],
    [0.0000000055, 0.6787519659, 315.1680293792],
    [0.00000000556, 1.30277646899, 133.1008708993],
    [0.00000000449, 6.05954557724, 141.6988906084],
    [0.00000000447, 5.83737433218, 823.9914342234],
    [0.00000000517, 3.62832879827, 934.9485149682],
    [0.00000000482, 1.04855231956, 1055.4497769261],
    [0.00000000482, 4.07207792722, 195.8906076987],
    [0.00000000428, 0.65142455407, 427.3489504014],
    [0.00000000585, 5.48406138684, 376.1956146969],
    [0.00000000469, 3.87344294455, 320.5846553506],
    [0.00000000488, 2.8352396426, 460.5384408198],
    [0.0000000045, 4.30419652064, 88.1149206916],
    [0.00000000537, 0.85582040238, 214.1928673153],
    [0.00000000438, 1.32216133929, 963.4027029714],
    [0.0000000056, 2.50374228728, 952.0963702766],
    [0.00000000442, 2.80002649649, 209.1544938538],
    [0.00000000443, 4.31062007978, 9992.8729037722],
    [0.00000000469, 0.45235276525, 464.7312265138],
    [0.00000000488, 0.35817443686, 36.9091953604],
    [0.00000000418, 4.81080887468, 775.233389447],
    [0.00000000417, 4.93943593579, 306.0969289181],
    [0.00000000483, 3.9284792242, 39.6175083461],
    [0.00000000467, 1.89153069484, 30.0562807905],
    [0.0000000041, 5.52148731635, 118.0706277456],
    [0.00000000406, 1.35991757653, 945.9942152321],
    [0.00000000446, 4.0665611248, 380.3884003909],
    [0.00000000466, 3.65954736664, 988.532484885],
    [0.00000000418, 1.40185532806, 313.9441891018],
    [0.00000000481, 1.80873987903, 43.1289704839],
    [0.00000000437, 0.86746182155, 170.9732741062],
    [0.00000000483, 4.49894122772, 46.2097904851],
    [0.00000000398, 2.90977731924, 131.5469622218],
    [0.00000000529, 3.74604329884, 699.1797664925],
    [0.00000000396, 0.34033987778, 2943.5060541272],
    [0.00000000545, 2.97400965609, 305.6068018236],
    [0.00000000412, 3.81935995126, 84.3428261229],
    [0.00000000425, 2.60672101181, 121.8427223143],
    [0.00000000474, 2.41769418569, 838.218528225],
    [0.00000000457, 1.27246488727, 107.7586406646],
    [0.00000000519, 3.12247974037, 10213.285546211],
    [0.00000000495, 4.63705386984, 301.4140161296],
    [0.00000000537, 3.92653937147, 212.4053235607],
    [0.00000000385, 3.3347632505, 806.725958836],
    [0.00000000477, 1.66001855277, 175.4266922311],
    [0.00000000378, 0.47722247042, 200.5564741447],
    [0.00000000459, 5.14821844812, 960.2213092337],
    [0.00000000401, 4.36420932544, 739.0579072695],
    [0.00000000467, 2.96423984091, 170.0100662597],
    [0.00000000457, 4.45829983338, 33.1371007917],
    [0.00000000476, 3.63257697985, 20.4950532349],
    [0.00000000462, 3.57494442856, 71.6002048296],
    [0.00000000376, 2.94770389653, 6062.6632075526],
    [0.00000000473, 5.32759318114, 373.9079928365],
    [0.00000000383, 1.84111991862, 346.3999663373],
    [0.00000000366, 2.05039240297, 87.3117715395],
    [0.00000000383, 2.00608370504, 3274.1250177854],
    [0.00000000374, 5.65444305031, 540.7366653585],
    [0.0000000041, 5.62629715297, 58.319272332],
    [0.00000000441, 6.26992749567, 378.9039276826],
    [0.00000000451, 3.05920369737, 898.7730327907],
    [0.00000000371, 5.65787287655, 89.7594520943],
    [0.00000000367, 5.71998148487, 96.8729990951],
    [0.0000000041, 1.06290837961, 1257.7031721002],
    [0.00000000418, 2.03053179312, 146.594251718],
    [0.00000000492, 0.89529424356, 423.6292454594],
    [0.00000000474, 2.43080822444, 705.1176573257],
    [0.00000000457, 3.42347802916, 829.6205085159],
    [0.00000000419, 0.32183412086, 90.5626012464],
    [0.00000000347, 3.6011680744, 449.232108125],
    [0.00000000397, 2.29159647723, 782.3469364478],
    [0.00000000433, 3.40938468811, 32.4557772355],
    [0.00000000343, 4.30952656038, 401.3253966105],
    [0.00000000351, 0.42160026295, 3686.4961146598],
    [0.0000000036, 5.83204569879, 491.5579294568],
    [0.00000000389, 2.73429108352, 36.1754821775],
    [0.00000000434, 0.33664392528, 55.1378785943],
    [0.00000000346, 5.09191837323, 392.6579409322],
    [0.00000000336, 2.38696934868, 295.1942410061],
    [0.00000000336, 1.56832822829, 233.7459645631],
    [0.000000004, 3.08774286568, 745.9108218394],
    [0.00000000468, 4.21298903633, 832.5894539325],
    [0.000000004, 1.32415028336, 551.1010420662],
    [0.00000000344, 1.52193307438, 754.8389099486],
    [0.00000000433, 3.06696455642, 885.4397106664],
    [0.00000000346, 4.7697143387, 4113.0943055358],
    [0.00000000329, 3.31034285904, 952.3570027075],
    [0.00000000425, 2.90590905341, 462.0229135281],
    [0.00000000342, 5.87738962422, 561.934294009],
    [0.00000000439, 0.20791179302, 768.8535556291],
    [0.0000000033, 2.08599193524, 614.6244920485],
    [0.00000000394, 3.59805431851, 1261.6353253633],
    [0.00000000369, 6.03075127328, 199.8057146193],
    [0.00000000375, 2.56075851331, 732.6951197941],
    [0.00000000408, 0.69233617038, 328.2407190726],
    [0.00000000331, 4.2833330937, 541.5398145106],
    [0.00000000323, 0.06694179304, 433.7599219866],
    [0.00000000431, 4.5060334092, 2914.0142358238],
    [0.00000000343, 2.18898146246, 80.1982245387],
    [0.00000000437, 5.34124436008, 387.2413149608],
    [0.00000000371, 4.82569229712, 103.3534066495],
    [0.00000000318, 3.75720880396, 749.2098356561],
    [0.00000000344, 0.70749566894, 229.9738699944],
    [0.00000000312, 6.02741985422, 361.3778198643],
    [0.0000000034, 0.64358874512, 303.8616966844],
    [0.00000000394, 0.49801994278, 248.4631856592],
    [0.00000000309, 5.83535487659, 236.1936451179],
    [0.00000000325, 2.65292455786, 757.2171545342],
    [0.00000000365, 0.56788400592, 402.2191684878],
    [0.00000000342, 3.83450185886, 519.3960243561],
    [0.00000000306, 0.35126074897, 354.9979860464],
    [0.00000000314, 5.42086935152, 1151.4290041439],
    [0.00000000384, 0.09367760642, 201.5196819912],
    [0.00000000307, 5.62165090342, 426.4863162914],
    [0.00000000301, 1.78550205039, 1354.4331588434],
    [0.000000003, 5.23426324539, 190.4045457581],
    [0.00000000296, 3.15801280224, 192.8522263129],
    [0.00000000381, 1.98600461808, 109.9456887885],
    [0.0000000037, 5.57659190517, 562.1467423301],
    [0.00000000305, 2.73187068494, 840.6662087798],
    [0.00000000374, 3.73375594662, 420.4478517217],
    [0.00000000307, 4.03149340189, 426.7100654606],
    [0.0000000032, 1.426651801, 2730.2069586892],
    [0.00000000392, 0.143432949, 206.3979967583],
    [0.00000000288, 2.44787565138, 623.2225117576],
    [0.00000000344, 1.57825843162, 6290.1893969922],
    [0.00000000317, 1.84490263693, 214.9436268407],
    [0.00000000346, 2.16849893508, 3171.0322435668],
    [0.00000000286, 1.01623455966, 315.6411101312],
    [0.00000000361, 3.44807605339, 259.769518354],
    [0.0000000028, 4.64272946177, 254.1404440615],
    [0.00000000285, 2.09430258387, 335.1418177523],
    [0.00000000281, 4.72136141979, 317.142629182],
    [0.00000000289, 4.70265740009, 29.7474642498],
    [0.0000000029, 2.74360609522, 551.031606097],
    [0.000000003, 5.23308974173, 1321.4390704036],
    [0.00000000283, 1.21193797828, 1699.2792165032],
    [0.0000000028, 0.45877292284, 38.6061163898],
    [0.00000000273, 1.81952809851, 1056.2005364515],
    [0.00000000336, 5.63115066542, 95.2284676924],
    [0.00000000309, 3.33676739908, 1193.9672737968],
    [0.00000000288, 2.57603349418, 1166.4068576709],
    [0.00000000277, 3.35359995343, 532.8723588323],
    [0.00000000287, 0.37229115993, 114.9416236346],
    [0.00000000274, 4.21164027953, 90.8232336773],
    [0.00000000267, 5.61367132586, 870.4618571394],
    [0.00000000376, 6.14391456675, 913.0001267923],
    [0.00000000296, 5.75705165982, 4010.0015313172],
    [0.00000000304, 1.97982468634, 495.9631634719],
    [0.00000000308, 5.08911712262, 481.7360694703],
    [0.00000000265, 0.02893016561, 172.4577468145],
    [0.00000000291, 2.10106037916, 619.2903584945],
    [0.00000000273, 4.78343050572, 771.3012361839],
    [0.00000000358, 0.04093867464, 637.4496057592],
    [0.00000000272, 5.86505586319, 332.1728723357],
    [0.00000000266, 3.28626000731, 560.7104537316],
    [0.00000000312, 3.91213951915, 1226.2106027112],
    [0.00000000258, 3.41185135958, 426.8106391971],
    [0.00000000257, 1.06772454181, 714.6788848813],
    [0.00000000258, 6.24129294573, 426.3857425549],
    [0.00000000256, 0.75289096697, 103.843533744],
    [0.00000000254, 3.21116652124, 102.3420146932],
    [0.00000000254, 6.14632777985, 620.253566341],
    [0.00000000266, 2.54280196709, 132.8884225782],
    [0.00000000314, 0.31303204249, 991.7138786227],
    [0.00000000317, 2.93589163442, 357.2332182801],
    [0.00000000266, 6.1228063667, 57.5161231799],
    [0.00000000254, 2.99730079627, 642.3449668688],
    [0.00000000267, 5.54663413439, 628.5909536192],
    [0.00000000348, 1.33319249154, 815.0633461142],
    [0.00000000278, 5.5957374192, 334.5511169213],
    [0.00000000303, 3.22789148979, 409.1897031367],
    [0.00000000246, 3.90430259983, 441.576044403],
    [0.0000000026, 3.8635529353, 639.3760214522],
    [0.0000000025, 0.07635434166, 2840.4132799086],
    [0.00000000246, 5.71009371698, 476.3194434989],
    [0.00000000301, 6.15272106984, 559.6990617753],
    [0.00000000268, 3.73809606804, 658.0565335787],
    [0.00000000316, 4.63035287047, 745.277682393],
    [0.00000000311, 3.51827727424, 2751.5475996916],
    [0.00000000239, 0.51133317457, 1041.2226829245],
    [0.00000000238, 5.4634727942, 4216.1870797544],
    [0.00000000262, 3.20254407166, 1251.3403846248],
    [0.00000000238, 1.02679111743, 1262.3860848887],
    [0.00000000277, 3.32996713394, 545.4719677737],
    [0.00000000271, 0.49229846069, 419.532827985],
    [0.00000000303, 3.77087511317, 285.3723810196],
    [0.00000000234, 3.64328189368, 407.4757357648],
    [0.0000000027, 3.93080966194, 313.4711083498],
    [0.00000000302, 3.15201610429, 915.235359026],
    [0.00000000264, 0.46127639727, 720.8986600048],
    [0.00000000235, 1.74238582338, 369.0820676961],
    [0.00000000284, 5.20345848078, 395.105621487],
    [0.00000000295, 5.03016292492, 594.6507036754],
    [0.0000000029, 1.94941528794, 907.3710524998],
    [0.00000000229, 0.11049722694, 3259.8979237838],
    [0.00000000304, 1.81516929363, 49.7212526229],
    [0.00000000268, 5.54944666204, 12352.8526045448],
    [0.00000000248, 4.39993603541, 385.5443939314],
    [0.00000000234, 1.63365119249, 3590.516887442],
    [0.00000000317, 4.74907646809, 420.005908737],
    [0.00000000228, 4.89094697746, 1181.4371008246],
    [0.00000000258, 2.41510535278, 550.1378342197],
    [0.00000000236, 4.10002766188, 6467.9257579616],
    [0.00000000249, 1.97767956861, 589.4947101349],
    [0.00000000226, 1.60308230318, 316.279995072],
    [0.00000000286, 6.10513234736, 484.7050148869],
    [0.00000000299, 3.71741328977, 1123.1178284926],
    [0.00000000263, 1.85502475341, 608.877797677],
    [0.0000000022, 0.94624116595, 316.5037442412],
    [0.00000000292, 3.12099513976, 47.6942631934],
    [0.00000000217, 4.93010394323, 281.1795953256],
    [0.00000000295, 3.18346450625, 1050.9963588012],
    [0.00000000248, 5.48523310249, 638.9340784675],
    [0.00000000276, 1.09325899753, 544.5087599272],
    [0.00000000279, 2.65446123759, 134.1122628556],
    [0.00000000247, 4.17284927352, 950.1388168163],
    [0.00000000212, 2.45582771491, 1164.7623262682],
    [0.00000000266, 2.30028827109, 314.9073969483],
    [0.00000000215, 3.55148746518, 1097.0942747017],
    [0.00000000223, 0.36862624591, 81.8951455681],
    [0.00000000283, 0.35013012349, 1269.4996318895],
    [0.00000000263, 0.58255768951, 386.9806825299],
    [0.00000000208, 4.61303945066, 668.2084619653],
    [0.00000000222, 4.51639912193, 304.1223291153],
    [0.00000000274, 0.63572336701, 679.2541622292],
    [0.00000000215, 0.74685271552, 1008.9793540101],
    [0.00000000268, 3.43326489941, 598.8434893694],
    [0.00000000271, 3.98364990268, 453.6855262499],
    [0.00000000215, 2.24139383226, 661.2379273164],
    [0.00000000264, 2.58516335032, 2527.2028039897],
    [0.00000000205, 1.94472028389, 650.1922270525],
    [0.00000000258, 1.50724315598, 1759.8337210689],
    [0.00000000272, 6.27135287672, 990.2294059144],
    [0.00000000201, 1.11891338895, 97.4155158163],
    [0.00000000236, 4.13547185065, 348.635198571],
    [0.00000000201, 2.67485193508, 1546.5346256309],
    [0.0000000025, 5.44391862722, 1254.5217783625],
    [0.00000000203, 5.48660442144, 557.0389328994],
    [0.0000000025, 0.32142312427, 25448.00585526019],
    [0.00000000198, 0.91019549387, 1310.3933701397],
    [0.000000002, 0.90438804926, 47.061123747],
    [0.00000000194, 4.05730813129, 426.8588233069],
    [0.00000000197, 0.58292199999, 156.6767441354],
    [0.00000000197, 2.5938418852, 639.8491022042],
    [0.00000000201, 1.49980256114, 827.9235874865],
    [0.00000000197, 5.79126360809, 639.9454704238],
    [0.00000000266, 1.45514683392, 109.2431133729],
    [0.00000000239, 4.63640382863, 868.7167520002],
    [0.00000000194, 5.59582424111, 426.3375584451],
    [0.00000000247, 2.91348766248, 689.6185389369],
    [0.00000000205, 1.04616771894, 448.6895914038],
    [0.00000000232, 1.76503818816, 354.2642728635],
    [0.00000000224, 3.45391027762, 1190.0351205337],
    [0.00000000221, 6.27951545913, 1596.1864422846],
    [0.00000000237, 1.24961141369, 882.9438460018],
    [0.00000000206, 5.17010664247, 253.4591205053],
    [0.00000000203, 0.25518217825, 4002.8879843164],
    [0.00000000245, 3.94368773869, 769.8167634756],
    [0.00000000255, 6.1179075155, 763.4369296577],
    [0.00000000194, 2.83197251801, 263.7016716171],
    [0.00000000237, 2.1400737388, 2700.7151403858],
    [0.00000000203, 3.00078001542, 1385.174968707],
    [0.00000000203, 3.88000057282, 419.4364597654],
    [0.00000000186, 4.79530535895, 843.6351541964],
    [0.00000000203, 0.16707173895, 535.9107402181],
    [0.00000000245, 0.76762638475, 5643.1785636774],
    [0.00000000183, 2.20151176434, 35.1640902212],
    [0.00000000242, 3.41613986919, 864.2420820159],
    [0.00000000249, 3.47840802421, 1045.8885493705],
    [0.00000000199, 4.70077509959, 1276.6131788903],
    [0.00000000189, 1.8424761039, 434.6749457233],
    [0.00000000192, 3.83148077309, 666.723989257],
    [0.00000000201, 1.34290804373, 1012.9115072732],
    [0.0000000021, 5.12097279511, 3494.5376602242],
    [0.00000000192, 1.36630036429, 904.4021070832],
    [0.00000000195, 1.62629576534, 364.3467652809],
    [0.00000000179, 1.6650299905, 244.791664827],
    [0.00000000186, 4.55663748319, 347.4113582936],
    [0.00000000201, 0.5021968074, 36.3879304986],
    [0.00000000179, 4.55153097409, 97.4636999261],
    [0.000000002, 0.68398141887, 2015.6710861598],
    [0.00000000195, 2.20599546209, 66.1835788582],
    [0.00000000186, 4.48925201018, 611.4430983108],
    [0.00000000186, 3.13663606153, 433.663553767],
    [0.00000000177, 3.62811326217, 326.6868103951],
    [0.00000000206, 0.38552475035, 857.1285350151],
    [0.00000000229, 1.22330638216, 2906.900688823],
    [0.00000000213, 6.08436923028, 271.61836777],
    [0.00000000174, 6.18833529233, 3576.2897934404],
    [0.0000000022, 2.89866380776, 322.6116447801],
    [0.00000000202, 2.43755817264, 812.1425848074],
    [0.00000000211, 4.27999470527, 1127.2624300768],
    [0.00000000188, 0.97173474238, 1080.7225711916],
    [0.00000000168, 0.65008064023, 1493.093668066],
    [0.00000000208, 4.68942071563, 5429.8794682394],
    [0.00000000182, 0.76058628096, 504.561183181],
    [0.00000000167, 6.22608046965, 108.50940019],
    [0.00000000176, 2.08816807487, 670.916774951],
    [0.0000000017, 1.55680702386, 1670.8250285],
    [0.00000000187, 4.12687876136, 9985.7593567714],
    [0.00000000166, 1.5859635437, 1379.7059531089],
    [0.0000000017, 1.30946662341, 837.6972633632],
    [0.00000000166, 0.02413278965, 224.6054281328],
    [0.00000000204, 6.12072939658, 9360.089164459],
    [0.00000000189, 0.28191962964, 1175.8080265321],
    [0.00000000184, 2.8746109364, 398.1440028728],
    [0.00000000172, 5.41410693088, 2306.7901615509],
    [0.00000000174, 0.94052578814, 632.0329797878],
    [0.00000000181, 2.20017945285, 1049.0869894507],
    [0.00000000176, 1.0985763266, 531.978586955],
    [0.00000000201, 2.68411933635, 795.6802585721],
    [0.00000000197, 1.43444932583, 347.3631741838],
    [0.000000002, 4.33954193534, 1364.7280995819],
    [0.00000000166, 2.8393687284, 3553.9115221378],
    [0.0000000016, 1.28778451384, 962.5089310941],
    [0.00000000206, 3.02518737424, 1141.1340634054],
    [0.000000002, 5.54644533685, 308.3151148093],
    [0.00000000158, 4.7546243761, 1534.7381658416],
    [0.00000000156, 3.42359004405, 241.7532834412],
    [0.00000000182, 5.26192506263, 968.1380053866],
    [0.00000000168, 0.3705510874, 10007.0999977738],
    [0.00000000174, 4.61279044571, 223.3334037456],
    [0.00000000158, 4.23116519562, 821.703812363],
    [0.00000000212, 5.98406058023, 432.7485300303],
    [0.0000000016, 4.08093018212, 632.7355552034],
    [0.00000000179, 5.74376301842, 924.0458270562],
    [0.00000000185, 3.01715709315, 55.8715917772],
    [0.00000000185, 0.75718598244, 1286.9081196288],
    [0.0000000017, 3.46903106526, 1304.9243545416],
    [0.00000000167, 3.19767851189, 635.231419868],
    [0.00000000153, 3.8300620821, 318.679491517],
    [0.00000000156, 1.61558494091, 110.2545053292],
    [0.00000000206, 1.62702696825, 389.9496279465],
    [0.00000000184, 3.31730160238, 1578.0271950199],
    [0.00000000184, 6.19913208096, 731.6837278378],
    [0.00000000158, 5.58628906712, 42.3258213318],
    [0.00000000159, 2.00727485442, 702.1487119091],
    [0.00000000155, 0.02889842368, 1357.6145525811],
    [0.00000000151, 5.80616069064, 680.0573113813],
    [0.00000000157, 5.67235483479, 77837.11123384659],
    [0.00000000156, 2.78001360754, 1567.7322542814],
    [0.00000000203, 5.91820261629, 971.1069508032],
    [0.00000000156, 5.68482948401, 649.4585138696],
    [0.00000000186, 5.72093247348, 664.2763087022],
    [0.00000000184, 4.05878767739, 976.7360250957],
    [0.00000000159, 3.10978439502, 230.7075831773],
    [0.00000000154, 4.54479813612, 1239.5439248355],
    [0.00000000177, 4.68148789757, 2921.1277828246],
    [0.00000000158, 4.30854435851, 633.7469471597],
    [0.00000000195, 5.33376523453, 1130.2313754934],
    [0.00000000188, 2.04023570497, 1127.0499817557],
    [0.00000000174, 2.88817750136, 25668.418497699],
    [0.00000000161, 2.9630000889, 152.7445908723],
    [0.0000000017, 1.7077956077, 493.303034596],
    [0.00000000156, 3.05331862578, 913.7508863177],
    [0.00000000169, 3.18325334507, 757.8078553652],
    [0.00000000145, 0.8967219869, 632.831923423],
    [0.00000000149, 2.69519361988, 203.2647871304],
    [0.00000000167, 2.96547549589, 1201.831580323],
    [0.00000000187, 3.17592113403, 842.9014410135],
    [0.00000000173, 1.9152883635, 3487.4241132234],
    [0.00000000154, 0.37169915171, 285.1117485887],
    [0.00000000198, 3.14620903981, 640.8604941605],
    [0.00000000143, 3.42760427364, 520.129737539],
    [0.00000000157, 2.34913118792, 5959.570433334],
    [0.00000000178, 5.34566184657, 272.5815756165],
    [0.00000000171, 3.34185265551, 3067.9394693482],
    [0.00000000171, 4.87848878292, 354.5249052944],
    [0.00000000189, 0.07069084691, 1585.8915015461],
    [0.00000000137, 1.28925665885, 214.1022445901],
    [0.00000000137, 3.494384829, 212.4959462859],
    [0.00000000174, 3.07450555579, 64.9597385808],
    [0.00000000181, 0.78652249647, 657.1627617014],
    [0.00000000158, 2.93809799392, 211.6545640353],
    [0.00000000133, 5.70724173596, 469.7271613599],
    [0.0000000014, 0.35530248121, 219.5188705615],
    [0.00000000132, 1.60614108449, 1372.5924061081],
    [0.00000000164, 1.68236348359, 707.5653378805],
    [0.00000000128, 1.49742950959, 45.2465826386],
    [0.00000000132, 4.98075995751, 238.5718897035],
    [0.0000000014, 3.62845435388, 423.8898778903],
    [0.00000000134, 1.41837795083, 3906.9087570986],
    [0.00000000127, 1.48966646069, 856.3777754897],
    [0.00000000158, 2.57990141197, 369.9758395734],
    [0.00000000132, 2.39662455993, 184.7272873558],
    [0.0000000014, 4.36785639279, 207.0793203145],
    [0.00000000157, 4.56655940808, 251.1714986449],
    [0.00000000125, 4.60433583965, 6076.8903015542],
    [0.00000000121, 1.59513269211, 184.8449074348],
    [0.00000000145, 5.85121885906, 221.8971151471],
    [0.00000000137, 0.76499603885, 476.1069951778],
    [0.00000000139, 6.02467582226, 429.3065038617],
    [0.00000000117, 0.23611722307, 426.7582495704],
    [0.00000000117, 3.13382984215, 426.4381321816],
    [0.00000000116, 4.3480144872, 418.9633790134],
    [0.00000000135, 2.69789181467, 455.1699989582],
    [0.00000000134, 1.19058772772, 502.8642621516],
    [0.00000000123, 3.97560160218, 499.895316735],
    [0.0000000011, 2.37032413718, 439.9315130003],
    [0.00000000109, 6.20303291896, 220.3007678542],
    [0.00000000109, 1.38979633175, 325.9530972122],
    [0.00000000115, 0.05845336809, 631.8205314667],
    [0.00000000139, 2.21086387259, 9573.388259897],
    [0.00000000142, 6.14666228712, 3340.6124266998],
    [0.00000000122, 4.77182119272, 604.4725636619],
    [0.00000000119, 3.03461367061, 528.2064923863],
    [0.00000000127, 2.97263950543, 498.9321088885],
    [0.00000000111, 5.01192320232, 220.2001941177],
    [0.00000000126, 3.95743516129, 566.600160455],
    [0.00000000098, 2.36210526249, 634.2682120215],
    [0.00000000108, 2.46872857126, 83.3796182764],
    [0.00000000101, 4.88259474274, 425.3261664888],
    [0.00000000127, 4.89006771254, 162.0933701068],
    [0.00000000099, 0.90073463816, 586.3133163972],
    [0.00000000099, 0.16310526294, 394.3548619616],
    [0.00000000115, 0.49160291262, 517.1607921224],
    [0.00000000101, 3.86043866859, 198.1087935899],
    [0.00000000105, 3.48222097813, 5863.5912061162],
    [0.00000000104, 4.61148354671, 220.5245170234],
    [0.00000000101, 4.77041950285, 427.8702152632],
    [0.00000000098, 2.90784721214, 199.9657733137],
    [0.00000000127, 0.14136936897, 2332.0629558164],
    [0.00000000091, 6.22628300117, 211.2933578679],
    [0.000000001, 5.14847283436, 226.7924762567],
    [0.00000000091, 4.84054379386, 215.3048330081],
    [0.00000000099, 4.375834924, 640.4185511758],
    [0.00000000093, 5.30395179617, 222.7002642992],
    [0.00000000086, 4.57481701854, 636.9765250072],
    [0.00000000111, 0.61102669309, 1089.129394439],
    [0.00000000086, 4.50969293872, 625.8826406335],
    [0.00000000088, 0.36828594935, 444.1242986943],
    [0.00000000093, 5.76287499885, 203.8979265768],
    [0.00000000082, 2.85558603378, 318.8395502114],
    [0.00000000082, 5.19618475111, 1467.8208738005],
    [0.00000000086, 0.97633784601, 200.0352092829],
    [0.00000000082, 4.78557953017, 195.7729876197],
    [0.00000000106, 2.29520624233, 799.6124118352],
    [0.00000000081, 3.57727166766, 205.9731001161],
    [0.00000000078, 5.5034351258, 262.8078997398],
    [0.00000000087, 0.76830756075, 201.9927627432],
    [0.00000000102, 2.11516755277, 206.9363079626],
    [0.00000000081, 5.29639775054, 111.1695290659],
    [0.00000000075, 2.77117107886, 255.8373650909],
    [0.00000000074, 5.81587984729, 316.4400537664],
    [0.00000000076, 1.78743197928, 171.6545976624],
    [0.00000000094, 4.99996904753, 378.6432952517],
    [0.00000000089, 5.85818860151, 807.9497991134],
    [0.00000000072, 0.99858616883, 280.2163874791],
    [0.00000000099, 0.15018241445, 186.2117600641],
    [0.00000000072, 5.15715918322, 110.1581371096],
];

const L1: &[Term] = &[
    [213.54295595986, 0.0, 0.0],
    [0.01296855005, 1.82820544701, 213.299095438],
    [0.00564347566, 2.88500136429, 7.1135470008],
    [0.0009832303, 1.08070061328, 426.598190876],
    [0.0010767877, 2.27769911872, 206.1855484372],
    [0.00040254586, 2.0412825709, 220.4126424388],
    [0.00019941734, 1.27954662736, 103.0927742186],
    [0.00010511706, 2.748803928, 14.2270940016],
    [0.00006939233, 0.40493079985, 639.897286314],
    [0.00004803325, 2.44194097666, 419.4846438752],
    [0.00004056325, 2.92166618776, 110.2063212194],
    [0.0000376863, 3.6496563146, 3.9321532631],
    [0.00003384684, 2.41694251653, 3.1813937377],
    [0.000033022, 1.26256486715, 433.7117378768],
    [0.00003071382, 2.3273931775, 199.0720014364],
    [0.00001953036, 3.563946833, 11.0457002639],
    [0.00001249348, 2.62803737519, 95.9792272178],
    [0.00000921683, 1.9608983425, 227.5261894396],
    [0.00000705587, 4.4168924933, 529.6909650946],
    [0.00000649654, 6.17418093659, 202.2533951741],
    [0.00000627603, 6.11088227167, 309.2783226558],
    [0.00000486843, 6.03998200305, 853.196381752],
    [0.00000468377, 4.61707843907, 63.7358983034],
    [0.00000478501, 4.98776987984, 522.5774180938],
    [0.0000041701, 2.11708169277, 323.5054166574],
    [0.0000040763, 1.29949556676, 209.3669421749],
    [0.00000343826, 3.95854178574, 412.3710968744],
    [0.00000339724, 3.63396398752, 316.3918696566],
    [0.00000335936, 3.77173072712, 735.8765135318],
    [0.00000331933, 2.86077699882, 210.1177017003],
    [0.00000352489, 2.31707079463, 632.7837393132],
    [0.00000289429, 2.73263080235, 117.3198682202],
    [0.00000265801, 0.54344631312, 647.0108333148],
    [0.00000230493, 1.64428879621, 216.4804891757],
    [0.00000280911, 5.74398845416, 2.4476805548],
    [0.00000191667, 2.96512946582, 224.3447957019],
    [0.00000172891, 4.07695221044, 846.0828347512],
    [0.00000167131, 2.59745202658, 21.3406410024],
    [0.00000136328, 2.28580246629, 10.2949407385],
    [0.00000131364, 3.44108355646, 742.9900605326],
    [0.00000127838, 4.09533471247, 217.2312487011],
    [0.00000108862, 6.16141072262, 415.5524906121],
    [0.00000093909, 3.48397279899, 1052.2683831884],
    [0.00000092482, 3.94755499926, 88.865680217],
    [0.00000097584, 4.72845436677, 838.9692877504],
    [0.000000866, 1.21951325061, 440.8252848776],
    [0.00000083463, 3.11269504725, 625.6701923124],
    [0.00000077588, 6.24408938835, 302.164775655],
    [0.00000061557, 1.82789612597, 195.1398481733],
    [0.000000619, 4.29344363385, 127.4717966068],
    [0.00000067106, 0.28961738595, 4.665866446],
    [0.00000056919, 5.01889578112, 137.0330241624],
    [0.0000005416, 5.12628572382, 490.3340891794],
    [0.00000054585, 0.28356341456, 74.7815985673],
    [0.00000051425, 1.45766406064, 536.8045120954],
    [0.00000065843, 5.64757042732, 9.5612275556],
    [0.0000005778, 2.47630552035, 191.9584544356],
    [0.00000044444, 2.70873627665, 5.4166259714],
    [0.00000046799, 1.1772121105, 149.5631971346],
    [0.0000004038, 3.88870105683, 728.762966531],
    [0.00000037768, 2.53379013859, 12.5301729722],
    [0.00000046649, 5.14818326902, 515.463871093],
    [0.00000045891, 2.23198878761, 956.2891559706],
    [0.000000404, 0.4128152044, 269.9214467406],
    [0.00000037191, 3.78239026411, 2.9207613068],
    [0.00000033778, 3.21070688046, 1368.660252845],
    [0.00000037969, 0.6466596718, 422.6660376129],
    [0.00000032857, 0.30063884563, 351.8165923087],
    [0.0000003305, 5.43038091186, 1066.49547719],
    [0.00000030276, 2.84067004928, 203.0041546995],
    [0.00000035116, 6.08421794089, 5.6290742925],
    [0.00000029667, 3.39052569135, 1059.3819301892],
    [0.00000033217, 4.64063092111, 277.0349937414],
    [0.00000031876, 4.3862292377, 1155.361157407],
    [0.00000028913, 2.02614760507, 330.6189636582],
    [0.00000028264, 2.74178953996, 265.9892934775],
    [0.00000030089, 6.18684614308, 284.1485407422],
    [0.00000031329, 2.43455855525, 52.6901980395],
    [0.00000026493, 4.51214170121, 340.7708920448],
    [0.00000021983, 5.14437352579, 4.192785694],
    [0.0000002223, 1.96481952451, 203.7378678824],
    [0.00000020824, 6.16048095923, 860.3099287528],
    [0.0000002169, 2.67578768862, 942.062061969],
    [0.00000022552, 5.88579123, 210.8514148832],
    [0.00000019807, 2.31345263487, 437.6438911399],
    [0.00000019447, 4.76573277668, 70.8494453042],
    [0.0000001931, 4.10209060369, 18.1592472647],
    [0.00000022662, 4.13732273379, 191.2076949102],
    [0.00000018209, 0.90310796389, 429.7795846137],
    [0.00000017667, 1.84954766042, 234.6397364404],
    [0.00000017547, 2.44735118493, 423.4167971383],
    [0.00000015428, 4.23790088205, 1162.4747044078],
    [0.00000014608, 3.59713247857, 1045.1548361876],
    [0.00000014111, 2.94262468353, 1685.0521225016],
    [0.00000016328, 4.05665272725, 949.1756089698],
    [0.00000013348, 6.2450959224, 38.1330356378],
    [0.00000015918, 1.06434204938, 56.6223513026],
    [0.00000014059, 1.43503954068, 408.4389436113],
    [0.00000013093, 5.75815864257, 138.5174968707],
    [0.00000015772, 5.59350835225, 6.1503391543],
    [0.00000014962, 5.77192239389, 22.0914005278],
    [0.00000016024, 1.93900586533, 1272.6810256272],
    [0.00000016751, 5.96673627422, 628.8515860501],
    [0.00000012843, 4.24658666814, 405.2575498736],
    [0.00000013628, 4.09892958087, 1471.7530270636],
    [0.00000015067, 0.74142807591, 200.7689224658],
    [0.00000010961, 1.55022573283, 223.5940361765],
    [0.00000011695, 1.81237511034, 124.433415221],
    [0.00000010346, 3.46814088412, 1375.7737998458],
    [0.00000012056, 1.85655834555, 131.4039498699],
    [0.00000010123, 2.38221133049, 107.0249274817],
    [0.00000009855, 3.95166998848, 430.5303441391],
    [0.00000009803, 2.55389483994, 99.9113804809],
    [0.00000010614, 5.36692189034, 215.7467759928],
    [0.0000001208, 4.84549317054, 831.8557407496],
    [0.0000001021, 6.0769296137, 32.2433289144],
    [0.00000009245, 3.6541746727, 142.4496501338],
    [0.00000008984, 1.23808405498, 106.2741679563],
    [0.00000009336, 5.81062768434, 7.1617311106],
    [0.00000009717, 1.38703872827, 145.6310438715],
    [0.00000008394, 4.42341211111, 703.6331846174],
    [0.0000000837, 5.64015188458, 62.2514255951],
    [0.00000008244, 2.42225929772, 1258.4539316256],
    [0.00000007784, 0.52562994711, 654.1243803156],
    [0.00000007626, 3.75258725596, 312.1990839626],
    [0.00000007222, 0.28429555677, 0.7507595254],
    [0.00000008236, 6.22250515902, 14.977853527],
    [0.00000007054, 0.5317781074, 388.4651552382],
    [0.00000006567, 3.48657341701, 35.4247226521],
    [0.00000009011, 4.9491962691, 208.633228992],
    [0.0000000898, 0.08138173719, 288.0806940053],
    [0.00000006421, 3.32905264657, 1361.5467058442],
    [0.00000006489, 2.89389587598, 114.1384744825],
    [0.00000006244, 0.54973852782, 65.2203710117],
    [0.00000006154, 2.67885860584, 2001.4439921582],
    [0.00000006742, 0.23586769279, 8.0767548473],
    [0.00000007297, 4.85321224483, 222.8603229936],
    [0.00000006302, 3.80651124694, 1788.1448967202],
    [0.00000005824, 4.39327457448, 81.7521332162],
    [0.00000006102, 0.88585782895, 92.0470739547],
    [0.00000006914, 2.04631426723, 99.1606209555],
    [0.00000005363, 5.47995103139, 563.6312150384],
    [0.00000005172, 2.11968421583, 214.2623032845],
    [0.00000005117, 5.76987684107, 565.1156877467],
    [0.00000006197, 1.625536888, 1589.0728952838],
    [0.0000000497, 0.41949366126, 76.2660712756],
    [0.0000000664, 5.82582210639, 483.2205421786],
    [0.00000005277, 4.57975789757, 134.5853436076],
    [0.00000004974, 4.20243895902, 404.5067903482],
    [0.0000000515, 4.67582673243, 212.3358875915],
    [0.00000004764, 4.59303997414, 554.0699874828],
    [0.00000004573, 3.24875415786, 231.4583427027],
    [0.00000004811, 0.46206327592, 362.8622925726],
    [0.00000005148, 3.33570646174, 1.4844727083],
    [0.00000004654, 5.80233066659, 217.964961884],
    [0.00000004509, 5.37581684215, 497.4476361802],
    [0.00000004443, 0.11349392292, 295.0512286542],
    [0.00000004943, 3.78020789259, 1265.5674786264],
    [0.00000004211, 4.8830602196, 98.8999885246],
    [0.00000004252, 5.00120115113, 213.3472795478],
    [0.00000004774, 4.53259894142, 1148.2476104062],
    [0.00000003911, 0.58582192963, 750.1036075334],
    [0.00000005069, 2.20305668335, 207.8824694666],
    [0.00000003553, 0.35374030841, 333.657345044],
    [0.00000003771, 0.98542435766, 24.3790223882],
    [0.00000003458, 1.84990273999, 225.8292684102],
    [0.00000003401, 5.31342401626, 347.8844390456],
    [0.00000003347, 0.21414641376, 635.9651330509],
    [0.00000003637, 1.61315058382, 245.5424243524],
    [0.00000003416, 2.19551489078, 1574.8458012822],
    [0.00000003655, 0.8054424569, 343.2185725996],
    [0.0000000426, 1.80258750109, 213.2509113282],
    [0.0000000311, 3.03815175282, 1677.9385755008],
    [0.00000003052, 1.33858964447, 543.9180590962],
    [0.00000003694, 0.81606028298, 344.7030453079],
    [0.00000003016, 3.36219319026, 7.8643065262],
    [0.00000002937, 4.86927342776, 144.1465711632],
    [0.00000002768, 2.42707131609, 2317.8358618148],
    [0.00000003059, 4.30820099442, 6062.6632075526],
    [0.0000000365, 5.12802531219, 218.9281697305],
    [0.00000002963, 3.53480751374, 2104.5367663768],
    [0.0000000323, 2.88057019783, 216.2198567448],
    [0.00000002984, 2.52971310583, 1692.1656695024],
    [0.00000002897, 5.7325648224, 9992.8729037722],
    [0.00000002591, 3.79880285744, 17.2654753874],
    [0.00000003495, 5.29902525443, 350.3321196004],
    [0.00000002859, 3.72804950659, 6076.8903015542],
    [0.00000002775, 0.23549396237, 357.4456666012],
    [0.00000002976, 2.48769315964, 46.470422916],
    [0.00000002487, 4.3786807853, 217.491881132],
    [0.00000002711, 5.1537684015, 10007.0999977738],
    [0.00000003127, 1.92343235583, 17.4084877393],
    [0.00000003181, 1.72419900322, 1169.5882514086],
    [0.00000002348, 0.77373103004, 414.0680179038],
    [0.00000002606, 3.4283691344, 31.019488637],
    [0.00000002556, 0.91735028377, 479.2883889155],
    [0.00000002399, 4.82440545738, 1279.794572628],
    [0.00000002245, 3.76323995584, 425.1137181677],
    [0.0000000302, 0.25310250109, 120.358249606],
    [0.00000002503, 2.10679832121, 168.0525127994],
    [0.00000002564, 1.63158205055, 182.279606801],
    [0.00000002221, 3.15472373256, 212.7778305762],
    [0.00000002357, 2.33145013714, 218.7157214094],
    [0.0000000251, 4.51903989011, 198.321241911],
    [0.00000002715, 5.76330259543, 618.5566453116],
    [0.00000002204, 3.35952557362, 160.6088973985],
    [0.00000002648, 0.71962005233, 85.8272988312],
    [0.00000002029, 5.28642331696, 125.9873238985],
    [0.00000002497, 1.36671447252, 1905.4647649404],
    [0.00000002017, 1.11498225426, 447.9388318784],
    [0.00000002052, 1.27587874735, 14.0146456805],
    [0.00000002254, 3.2244767419, 273.1028404783],
    [0.00000002014, 0.39787014152, 358.9301393095],
    [0.00000001981, 2.33696859021, 28.4541880032],
    [0.00000002197, 5.93386789705, 13.3333221243],
    [0.00000002237, 3.64433751164, 213.8203602998],
    [0.0000000193, 1.8567174034, 1.2720243872],
    [0.00000002037, 5.05300562628, 424.1505103212],
    [0.00000001994, 1.35690802366, 20.6069278195],
    [0.00000001911, 3.44106886717, 69.1525242748],
    [0.00000001925, 3.75243031545, 28.3111756513],
    [0.00000002297, 4.24557050896, 1464.6394800628],
    [0.00000002117, 2.25897766314, 116.4260963429],
    [0.00000001847, 5.40631472802, 31.492569389],
    [0.00000001841, 1.56916484272, 650.9429865779],
    [0.00000001884, 6.27233535258, 25.1297819136],
    [0.0000000196, 4.8948401484, 275.5505210331],
    [0.00000002016, 5.45791785675, 842.1506814881],
    [0.00000002282, 4.9627694744, 258.8757464767],
    [0.00000001709, 3.99098237135, 416.3032501375],
    [0.00000002176, 0.00746756006, 0.8937718773],
    [0.00000001634, 5.30978165487, 251.4321310758],
    [0.00000001687, 0.41586020065, 54.1746707478],
    [0.0000000191, 2.5982575579, 329.7251917809],
    [0.00000002113, 2.56582292726, 59.8037450403],
    [0.00000001921, 2.42279051938, 113.3877149571],
    [0.00000001658, 5.4732365154, 1073.6090241908],
    [0.0000000159, 2.7754529735, 1994.3304451574],
    [0.00000001936, 3.47558926847, 1581.959348283],
    [0.00000001649, 1.82779010589, 128.9562693151],
    [0.00000001598, 1.718064653, 129.9194771616],
    [0.00000001967, 1.25160413795, 621.7380390493],
    [0.00000001702, 1.910761028, 278.5194664497],
    [0.00000001569, 0.16491194947, 643.0786800517],
    [0.00000001989, 5.28799230992, 508.3503240922],
    [0.0000000152, 0.56950979689, 320.3240229197],
    [0.00000001501, 1.99815894193, 1891.2376709388],
    [0.00000001532, 3.27362317849, 2420.9286360334],
    [0.00000001701, 2.72041261115, 767.3690829208],
    [0.00000001561, 6.09424459628, 280.9671470045],
    [0.00000001331, 4.2094444379, 546.956440482],
    [0.00000001381, 2.0676810083, 192.6921676185],
    [0.00000001368, 6.28049502257, 1795.258443721],
    [0.00000001519, 2.20299556153, 2008.557539159],
    [0.00000001356, 4.01521042413, 721.6494195302],
    [0.00000001296, 4.84815978742, 45.5766510387],
    [0.00000001267, 5.28146654999, 173.9422195228],
    [0.00000001402, 6.1295155155, 39.3568759152],
    [0.00000001252, 2.19169926554, 2634.2277314714],
    [0.00000001466, 4.16354845643, 26.826702943],
    [0.00000001285, 3.76170874847, 2.2876218604],
    [0.000000015, 5.41022492529, 214.0498549634],
    [0.00000001396, 4.78595583428, 219.4494345923],
    [0.0000000143, 0.70934745161, 254.9435932136],
    [0.00000001195, 3.71281085322, 264.5048207692],
    [0.00000001181, 0.42635230882, 41.6444977756],
    [0.0000000119, 2.02079286787, 1485.9801210652],
    [0.0000000116, 5.23649231796, 181.0557665236],
    [0.00000001535, 3.62746990294, 561.1835344836],
    [0.0000000112, 1.0912792213, 6.592282139],
    [0.000000011, 0.27844612141, 184.0941479094],
    [0.00000001227, 1.3996968127, 209.106309744],
    [0.00000001353, 6.12903657666, 207.6700211455],
    [0.00000001124, 6.05105541765, 291.262087743],
    [0.00000001194, 4.79565407023, 1478.8665740644],
    [0.00000001082, 4.73602931755, 78.7137518304],
    [0.00000001202, 3.47301104146, 51.2057253312],
    [0.00000001298, 2.34761557822, 210.3783341312],
    [0.00000001166, 4.20037524355, 417.0369633204],
    [0.00000001228, 3.94985981275, 1781.0313497194],
    [0.00000001401, 2.41318931513, 636.7158925763],
    [0.00000001009, 6.17414889934, 2111.6503133776],
    [0.00000001084, 3.68958647346, 274.0660483248],
    [0.00000001068, 0.80258823981, 436.8931316145],
    [0.00000001007, 3.4279250886, 629.6023455755],
    [0.00000000998, 5.57130056835, 205.2223405907],
    [0.00000001058, 1.05742945779, 237.6781178262],
    [0.0000000102, 3.336672903, 166.828672522],
    [0.00000000965, 6.08359503243, 601.7642506762],
    [0.00000001005, 3.56310748091, 643.8294395771],
    [0.00000000987, 0.97129012811, 305.3461693927],
    [0.00000000927, 3.87717400791, 135.336103133],
    [0.00000001129, 5.94840103961, 196.6243208816],
    [0.00000001118, 5.25415059584, 189.7232222019],
    [0.000000012, 1.16671933467, 2221.856634597],
    [0.00000000909, 2.14001565047, 617.8058857862],
    [0.00000000899, 2.31811625712, 312.4597163935],
    [0.00000001081, 0.91006048421, 313.2104759189],
    [0.00000000891, 3.74923531791, 916.9322800554],
    [0.00000000886, 4.76066858907, 776.9303104764],
    [0.00000000912, 0.99592540858, 491.8185618877],
    [0.0000000088, 3.67349449376, 25.2727942655],
    [0.00000001203, 1.3974926741, 337.732510659],
    [0.00000000867, 0.11684071625, 267.4737661858],
    [0.00000000879, 6.12222682852, 867.4234757536],
    [0.0000000108, 0.15038819285, 175.1660598002],
    [0.00000000988, 3.12456192471, 214.7835681463],
    [0.00000000889, 4.70508769146, 148.0787244263],
    [0.00000000827, 6.08977582217, 488.8496164711],
    [0.00000000889, 5.05124166027, 220.4608265486],
    [0.00000000828, 6.27262544155, 1382.8873468466],
    [0.0000000104, 5.76735098196, 501.3797894433],
    [0.00000001103, 0.4870647723, 692.5874843535],
    [0.0000000081, 2.5036238508, 2310.722314814],
    [0.0000000085, 4.55410385197, 77.962992305],
    [0.00000001108, 5.31792012163, 235.3904959658],
    [0.0000000079, 0.89213206336, 342.2553647531],
    [0.00000000775, 2.85873930879, 211.8146227297],
    [0.00000000842, 2.99884993009, 2737.32050569],
    [0.00000000784, 0.0574845924, 543.0242872189],
    [0.00000000754, 5.18317747668, 244.318584075],
    [0.00000000969, 1.31760425414, 486.4019359163],
    [0.00000000943, 5.48641674428, 339.2864193365],
    [0.00000000759, 6.25347177163, 151.0476698429],
    [0.0000000071, 2.4161996881, 247.2393453818],
    [0.00000000794, 2.59522645936, 1.6445314027],
    [0.00000000857, 1.99318788624, 248.7238180901],
    [0.00000000717, 4.56798357445, 121.2520214833],
    [0.00000000671, 2.50955477476, 444.7574381407],
    [0.00000000683, 5.51033310275, 487.3651437628],
    [0.00000000684, 0.01892628603, 228.276948965],
    [0.00000000665, 1.47172657769, 427.5613987225],
    [0.00000000761, 4.61079808671, 23.5758732361],
    [0.00000000807, 3.2151371812, 1898.3512179396],
    [0.00000000645, 1.92436523628, 2950.619601128],
    [0.00000000624, 6.05830190539, 241.6102710893],
    [0.00000000699, 4.02804515616, 425.6349830295],
    [0.00000000624, 5.85966148394, 696.5196376166],
    [0.0000000062, 1.86426453489, 2207.6295405954],
    [0.00000000641, 5.69868017561, 319.5732633943],
    [0.00000000646, 3.78920578728, 1038.0412891868],
    [0.00000000672, 2.54160055954, 271.4059194489],
    [0.00000000768, 1.80484245332, 2324.9494088156],
    [0.00000000737, 1.50539891226, 268.4369740323],
    [0.00000000836, 1.2658381101, 212.5483359126],
    [0.00000000753, 5.2753616624, 204.7010757289],
    [0.00000000633, 2.19920009577, 1802.3719907218],
    [0.0000000072, 2.58587107868, 472.1748419147],
    [0.00000000683, 3.8322386642, 43.2890291783],
    [0.0000000074, 6.21601938401, 556.5176680376],
    [0.00000000795, 1.14460330178, 381.3516082374],
    [0.00000000678, 3.65930963429, 2097.423219376],
    [0.00000000568, 5.9215866109, 2428.0421830342],
    [0.0000000057, 1.18024241664, 131.5469622218],
    [0.00000000566, 4.74157739398, 380.12776796],
    [0.00000000586, 5.71168743146, 570.7447620392],
    [0.0000000055, 4.92413290959, 188.9200730498],
    [0.00000000712, 2.69456114358, 16.6747745564],
    [0.00000000545, 5.387255296, 206.233732547],
    [0.00000000572, 5.79167804981, 195.8906076987],
    [0.00000000602, 5.81756794592, 963.4027029714],
    [0.00000000588, 4.25026865253, 426.6463749858],
    [0.00000000563, 3.28295055824, 193.655375465],
    [0.00000000583, 5.44099997963, 526.5095713569],
    [0.00000000679, 4.45748326743, 105.5404547734],
    [0.00000000516, 5.99843937287, 289.5651667136],
    [0.0000000052, 2.19322568805, 180.1619946463],
    [0.00000000543, 4.19333695628, 213.1872208534],
    [0.00000000586, 3.03470168346, 6275.9623029906],
    [0.00000000572, 3.96788877624, 140.001969579],
    [0.00000000611, 4.1539223987, 436.1594184316],
    [0.00000000505, 2.95739392583, 135.5485514541],
    [0.00000000587, 4.55320395537, 5863.5912061162],
    [0.00000000492, 2.71595874382, 84.9335269539],
    [0.00000000576, 5.98300938454, 9793.8009023358],
    [0.00000000489, 5.68450383182, 533.6231183577],
    [0.00000000519, 3.09688510923, 327.4375699205],
    [0.00000000486, 5.24220804875, 5849.3641121146],
    [0.00000000475, 4.51295931678, 411.620337349],
    [0.0000000054, 4.44843952768, 10206.1719992102],
    [0.00000000479, 0.87707794164, 207.1487562837],
    [0.00000000468, 0.46572028197, 306.0969289181],
    [0.00000000586, 0.86387928244, 2538.2485042536],
    [0.00000000475, 6.19152982788, 397.3932433474],
    [0.00000000541, 1.47958133221, 42.5382696529],
    [0.00000000496, 6.07879620658, 576.1613880106],
    [0.00000000447, 2.59259132013, 7.2254215854],
    [0.00000000445, 5.0682730047, 778.4147831847],
    [0.0000000056, 0.00461017471, 221.3758502853],
    [0.00000000456, 4.60143715337, 710.7467316182],
    [0.00000000449, 5.79223649465, 685.4739373527],
    [0.00000000501, 1.91370965325, 831.1049812242],
    [0.00000000595, 4.90329839607, 824.7421937488],
    [0.00000000447, 4.88662794571, 429.0458714308],
    [0.00000000445, 1.74764943142, 525.7588118315],
    [0.00000000457, 0.8089271253, 458.8415197904],
    [0.00000000543, 2.60317945475, 213.4109700226],
    [0.00000000493, 0.61947189193, 41.0537969446],
    [0.00000000455, 2.69847252264, 3053.7123753466],
    [0.00000000429, 3.89071982978, 92.7978334801],
    [0.00000000411, 1.34981168865, 27.0873353739],
    [0.00000000448, 1.84775051361, 980.6681783588],
    [0.00000000445, 4.21745990439, 905.8865797915],
    [0.00000000403, 2.33067250642, 2627.1141844706],
    [0.00000000404, 5.00179215709, 431.264057322],
    [0.00000000384, 1.65634584042, 241.7532834412],
    [0.0000000041, 0.76907037678, 395.578702239],
    [0.00000000456, 1.98353741244, 213.5115437591],
    [0.00000000459, 2.04878772547, 285.6330134505],
    [0.00000000396, 5.04141834913, 298.2326223919],
    [0.00000000377, 5.68073822097, 2744.4340526908],
    [0.00000000415, 4.41600504868, 179.3588454942],
    [0.00000000396, 4.2987285195, 206.706813299],
    [0.00000000389, 5.69091953122, 849.2642284889],
    [0.00000000369, 1.36192003466, 835.0371344873],
    [0.00000000374, 0.41402282126, 9779.5738083342],
    [0.00000000379, 1.72255764532, 184.9879197867],
    [0.00000000365, 5.88205574821, 19.643719973],
    [0.00000000456, 4.81297899859, 213.0866471169],
    [0.00000000359, 1.06819138836, 206.1373643274],
    [0.00000000367, 1.14184327929, 569.0478410098],
    [0.00000000352, 3.04388401587, 638.4128136057],
    [0.00000000463, 1.55834877017, 421.1815649046],
    [0.00000000459, 5.34648461645, 699.7010313543],
    [0.00000000383, 4.05921035379, 739.8086667949],
    [0.00000000354, 1.09760553168, 738.7972748386],
    [0.00000000382, 0.05348541587, 252.6559713532],
    [0.00000000344, 1.18536656224, 439.1283638482],
    [0.00000000382, 2.10483762147, 532.6117264014],
    [0.00000000361, 0.50215018154, 50.4025761791],
    [0.00000000351, 3.49546336297, 1354.4331588434],
    [0.00000000395, 4.2627887156, 432.2272651685],
    [0.00000000345, 2.38455893509, 426.0769260142],
    [0.0000000035, 1.51541607946, 259.769518354],
    [0.00000000426, 5.29998227949, 934.9485149682],
    [0.00000000339, 5.59774645356, 519.3960243561],
    [0.00000000388, 3.40083809779, 2413.8150890326],
    [0.00000000324, 3.68352014131, 72.0732855816],
    [0.00000000323, 1.79597508586, 405.9912630565],
    [0.00000000366, 3.56764349139, 1119.1856752295],
    [0.00000000358, 4.11241839677, 37.8724032069],
    [0.00000000423, 1.45116702108, 2641.3412784722],
    [0.00000000314, 0.68465789313, 757.2171545342],
    [0.0000000032, 3.12697568936, 945.9942152321],
    [0.00000000338, 4.89782013581, 898.7730327907],
    [0.00000000319, 5.76881401291, 69.3649725959],
    [0.0000000031, 5.35598720822, 815.0633461142],
    [0.00000000369, 4.46143610142, 421.93232443],
    [0.00000000311, 2.19275640712, 5856.4776591154],
    [0.00000000306, 2.99917010799, 1130.2313754934],
    [0.0000000033, 0.64102961163, 558.0021407459],
    [0.00000000305, 0.40963115602, 661.2379273164],
    [0.0000000032, 3.2926731994, 760.25553592],
    [0.00000000298, 5.48693246086, 702.1487119091],
    [0.00000000352, 2.18179692198, 2118.7638603784],
    [0.00000000299, 5.94980651345, 572.2292347475],
    [0.00000000343, 2.6290008365, 213.5597278689],
    [0.00000000296, 4.12563821701, 73.297125859],
    [0.0000000036, 2.94387423457, 2214.7430875962],
    [0.00000000293, 5.71837797264, 60.7669528868],
    [0.00000000326, 1.93806509331, 480.7728616238],
    [0.00000000335, 2.60120542851, 518.3846323998],
    [0.00000000322, 2.89685459163, 427.1194557378],
    [0.00000000367, 2.2048984833, 518.6452648307],
    [0.00000000361, 3.31464351282, 630.3360587584],
    [0.00000000288, 0.8776047815, 887.7273325268],
    [0.0000000029, 0.24071300709, 705.1176573257],
    [0.00000000332, 5.96464701829, 100.6450936638],
    [0.00000000284, 1.58760551116, 681.5417840896],
    [0.00000000281, 1.68339116394, 3267.0114707846],
    [0.00000000287, 3.54730637851, 756.3233826569],
    [0.00000000331, 2.74250642576, 22.8945496799],
    [0.00000000281, 4.79802388453, 409.9234163196],
    [0.00000000372, 1.08754087151, 426.5500067662],
    [0.0000000034, 0.59629116557, 627.3671133418],
    [0.00000000325, 4.07319450014, 511.5317178299],
    [0.00000000273, 0.71334827688, 305.0855369618],
    [0.00000000272, 1.76124839309, 945.2434557067],
    [0.00000000295, 4.00327005783, 432.7485300303],
    [0.00000000271, 5.28903262032, 1080.7225711916],
    [0.00000000276, 3.89192411657, 610.6923387854],
    [0.00000000294, 2.80121651058, 724.8308132679],
    [0.00000000319, 5.24824059915, 229.9738699944],
    [0.00000000264, 2.36406383589, 731.9443602687],
    [0.00000000288, 4.6781884493, 170.7608257851],
    [0.00000000326, 3.81328980623, 525.4981794006],
    [0.00000000283, 3.52027709716, 319.3126309634],
    [0.00000000264, 0.25871603855, 494.2662424425],
    [0.00000000261, 4.08135671345, 25.8634950965],
    [0.00000000296, 4.49129913731, 693.5506922],
    [0.00000000292, 0.65370180027, 25867.49049913539],
    [0.00000000292, 0.12510953311, 25881.717593137],
    [0.00000000254, 4.03912322565, 990.2294059144],
    [0.00000000288, 3.98604904657, 707.7777862016],
    [0.00000000285, 1.92328297431, 3134.4268782626],
    [0.00000000284, 2.45411523294, 3120.199784261],
    [0.00000000256, 3.6328275778, 430.79097657],
    [0.00000000283, 2.51091647682, 286.596221297],
    [0.00000000325, 4.33261281211, 732.6951197941],
    [0.00000000264, 0.05450228136, 650.1922270525],
    [0.00000000273, 4.90735780421, 409.1897031367],
    [0.00000000304, 4.61759348542, 468.2426886516],
    [0.00000000285, 5.7246790389, 33.9402499438],
    [0.00000000242, 5.28336514054, 403.0223176399],
    [0.0000000027, 0.51583145648, 263.7016716171],
    [0.00000000263, 4.81670787366, 1055.4497769261],
    [0.00000000237, 2.92617048443, 913.9633346388],
    [0.00000000246, 2.19675150666, 2943.5060541272],
    [0.00000000278, 4.58404840578, 398.1440028728],
    [0.00000000234, 2.64374114605, 739.0579072695],
    [0.00000000229, 3.80445074468, 58.1068240109],
    [0.000000003, 2.06111081979, 429.5189521828],
    [0.00000000223, 3.39888651505, 188.0263011725],
    [0.00000000301, 2.96411385108, 624.919432787],
    [0.00000000221, 1.79137414078, 2524.021410252],
    [0.0000000022, 0.95686592581, 1894.4190646765],
    [0.00000000225, 4.30669421945, 637.4496057592],
    [0.00000000214, 1.70442143644, 658.0565335787],
    [0.00000000227, 3.22613053351, 638.9340784675],
    [0.0000000022, 2.66798936385, 953.1077622329],
    [0.00000000253, 3.09377787768, 29.2049475286],
    [0.00000000244, 3.15828383212, 7.0016724162],
    [0.00000000295, 4.95843934543, 714.6788848813],
    [0.00000000209, 0.94525938634, 864.2420820159],
    [0.00000000216, 0.1222123618, 28.5718080822],
    [0.00000000214, 2.80190604605, 373.9079928365],
    [0.00000000212, 2.07343849515, 1357.6145525811],
    [0.00000000216, 1.25531205533, 477.8039162072],
    [0.00000000206, 5.35971491902, 3060.8259223474],
    [0.00000000204, 3.0857941046, 67.6680515665],
    [0.0000000021, 1.91489853604, 938.1299087059],
    [0.00000000209, 1.46554109301, 952.3570027075],
    [0.00000000202, 3.57670882297, 334.5511169213],
    [0.00000000228, 5.66209641464, 1699.2792165032],
    [0.00000000197, 4.61055255182, 464.7312265138],
    [0.00000000193, 4.24606721746, 141.6988906084],
    [0.00000000266, 0.69665031373, 2854.6403739102],
    [0.00000000227, 1.31845358943, 230.7075831773],
    [0.00000000192, 5.26739976413, 504.561183181],
    [0.00000000187, 0.8553719223, 273.8536000037],
    [0.00000000199, 3.91291687807, 418.5214360287],
    [0.00000000192, 6.15674105214, 611.4430983108],
    [0.0000000021, 1.47873602747, 205.4347889118],
    [0.00000000194, 2.37167703302, 3370.1042450032],
    [0.00000000228, 2.15266015145, 55.1378785943],
    [0.00000000201, 2.71380671608, 586.3133163972],
    [0.00000000194, 3.29560033731, 1670.8250285],
    [0.00000000201, 4.23447633663, 1493.093668066],
    [0.00000000181, 3.61567262848, 9786.687355335],
    [0.00000000181, 2.83211558346, 1262.3860848887],
    [0.00000000242, 4.69869158516, 1141.1340634054],
    [0.00000000184, 4.66807336402, 1251.3403846248],
    [0.00000000221, 2.25887876254, 355.7487455718],
    [0.000000002, 1.17340443616, 4952.0635932862],
    [0.00000000222, 2.23360866067, 2435.155730035],
    [0.00000000175, 0.04701598422, 107.7586406646],
    [0.00000000171, 5.0250074269, 93.531546663],
    [0.00000000184, 5.19723697138, 835.7878940127],
    [0.00000000221, 4.49141283681, 913.0001267923],
    [0.00000000195, 0.92088046109, 551.031606097],
    [0.00000000166, 5.01778115937, 354.9979860464],
    [0.00000000165, 2.26267552932, 406.954470903],
    [0.00000000189, 0.31221126958, 420.9691165835],
    [0.00000000196, 2.70333585839, 774.4826299216],
    [0.00000000176, 6.12029409039, 181.806526049],
    [0.00000000172, 1.94132177757, 3259.8979237838],
    [0.0000000016, 0.55319954265, 5429.8794682394],
    [0.00000000161, 2.88623631474, 184.8449074348],
    [0.00000000192, 0.26639534884, 295.1942410061],
    [0.00000000167, 3.71345214172, 1056.2005364515],
    [0.00000000195, 4.83926717598, 1596.1864422846],
    [0.00000000156, 2.81916058733, 428.0826635843],
    [0.00000000215, 1.88276472005, 220.364458329],
    [0.00000000167, 2.68872854428, 423.6774295692],
    [0.00000000154, 1.66553954375, 115.6229471908],
    [0.00000000175, 0.20216461467, 384.0599212231],
    [0.00000000201, 4.38095931887, 418.0001711669],
    [0.00000000167, 1.86485857353, 393.4610900843],
    [0.00000000155, 0.92480392431, 282.6640680339],
    [0.00000000146, 1.97663966745, 9360.089164459],
    [0.0000000016, 2.62483919699, 353.301065017],
    [0.00000000186, 1.37307151419, 292.0128472684],
    [0.00000000198, 1.15631374887, 2957.7331481288],
    [0.00000000144, 4.82956915076, 453.424893819],
    [0.00000000149, 3.60682821788, 205.6642835754],
    [0.00000000147, 4.48377791879, 81.8951455681],
    [0.00000000147, 5.74795037748, 856.3777754897],
    [0.00000000142, 3.53823120158, 212.0270710508],
    [0.0000000014, 0.70476909062, 640.8604941605],
    [0.00000000139, 1.39047667205, 1261.6353253633],
    [0.00000000153, 3.29559426243, 391.1734682239],
    [0.00000000158, 1.79872341304, 326.6868103951],
    [0.00000000174, 3.98677435872, 1049.0869894507],
    [0.00000000171, 4.16825100469, 213.0384630071],
    [0.00000000133, 4.74095454922, 0.0481841098],
    [0.00000000155, 5.3231361873, 2015.6710861598],
    [0.00000000158, 2.67557086253, 2531.1349572528],
    [0.00000000158, 4.64622526567, 427.3489504014],
    [0.00000000123, 2.20103444636, 210.5907824523],
    [0.0000000016, 1.85888551524, 201.5196819912],
    [0.00000000119, 3.12572799769, 238.5718897035],
    [0.0000000012, 4.62897224203, 203.2647871304],
    [0.00000000129, 4.92592016162, 1286.9081196288],
    [0.00000000132, 3.44682160054, 156.6767441354],
    [0.00000000143, 0.67951827513, 425.8474313506],
    [0.00000000114, 5.46519773276, 552.5855147745],
    [0.00000000132, 1.76335093671, 432.0148168474],
    [0.00000000113, 0.68933513038, 450.9772132642],
    [0.00000000128, 2.13986068877, 2751.5475996916],
    [0.00000000123, 4.59695145319, 216.0074084237],
    [0.00000000119, 1.04688666457, 462.0229135281],
    [0.00000000108, 5.36873170289, 3377.217792004],
    [0.00000000142, 6.24626256472, 299.1263942692],
    [0.00000000118, 0.6344825351, 369.9758395734],
    [0.00000000105, 2.31570619675, 200.5564741447],
    [0.00000000124, 1.8711081514, 850.0149880143],
    [0.00000000106, 0.5562366257, 114.3991069134],
    [0.00000000102, 3.95315219638, 361.3778198643],
    [0.00000000095, 4.10658529323, 10213.285546211],
    [0.00000000097, 1.13534710734, 387.2413149608],
    [0.00000000096, 4.46689094543, 401.3253966105],
    [0.00000000119, 2.33636675091, 318.8395502114],
    [0.00000000115, 3.37508073115, 313.9441891018],
    [0.00000000106, 3.7358621165, 220.9339073006],
    [0.0000000009, 0.59788492023, 227.3137411185],
    [0.00000000103, 5.09172929383, 213.4591541324],
    [0.00000000097, 5.95268532215, 1044.4040766622],
    [0.00000000103, 1.70625660572, 213.1390367436],
    [0.0000000008, 0.86872596168, 233.9060232575],
    [0.00000000089, 5.3599093223, 214.1928673153],
    [0.0000000008, 2.69565238975, 540.7366653585],
    [0.00000000095, 1.19504849611, 460.5384408198],
    [0.00000000105, 0.58624363205, 481.7360694703],
    [0.00000000099, 2.68841109007, 219.891377577],
    [0.00000000098, 1.59923557478, 484.7050148869],
    [0.00000000081, 1.12279793521, 420.4478517217],
    [0.00000000075, 4.58892231446, 394.3548619616],
    [0.00000000099, 4.6889585175, 448.6895914038],
    [0.00000000076, 1.66929798365, 196.0336200506],
    [0.00000000087, 3.1247719509, 857.1285350151],
    [0.00000000078, 5.5981938746, 364.3467652809],
    [0.00000000079, 3.53267171729, 969.6224780949],
];

const L2: &[Term] = &[
    [0.00116441181, 1.17987850633, 7.1135470008],
    [0.00091920844, 0.07425261094, 213.299095438],
    [0.00090592251, 0.0, 0.0],
    [0.00015276909, 4.06492007503, 206.1855484372],
    [0.00010631396, 0.25778277414, 220.4126424388],
    [0.00010604979, 5.40963595885, 426.598190876],
    [0.00004265368, 1.0459555663, 14.2270940016],
    [0.00001215527, 2.91860042123, 103.0927742186],
    [0.00001164684, 4.60942128971, 639.897286314],
    [0.00001081967, 5.6913035167, 433.7117378768],
    [0.00001020079, 0.63369182642, 3.1813937377],
    [0.00001044754, 4.04206453611, 199.0720014364],
    [0.00000633582, 4.38825410036, 419.4846438752],
    [0.00000549329, 5.57303134242, 3.9321532631],
    [0.00000456914, 1.26840971349, 110.2063212194],
    [0.000004251, 0.20935499279, 227.5261894396],
    [0.00000273739, 4.28841011784, 95.9792272178],
    [0.00000161571, 1.3813914942, 11.0457002639],
    [0.00000129494, 1.5658688417, 309.2783226558],
    [0.00000117008, 3.88120915956, 853.196381752],
    [0.00000105415, 4.90003203599, 647.0108333148],
    [0.00000100967, 0.892704931, 21.3406410024],
    [0.00000095227, 5.62561150598, 412.3710968744],
    [0.00000081948, 1.02477558315, 117.3198682202],
    [0.00000074857, 4.76178468163, 210.1177017003],
    [0.00000082727, 6.05030934786, 216.4804891757],
    [0.00000095659, 2.91093561539, 316.3918696566],
    [0.00000063696, 0.35179804917, 323.5054166574],
    [0.0000008486, 5.73472777961, 209.3669421749],
    [0.00000060647, 4.8751785019, 632.7837393132],
    [0.00000066459, 0.48297940601, 10.2949407385],
    [0.00000067184, 0.45648612616, 522.5774180938],
    [0.00000053281, 2.74730541387, 529.6909650946],
    [0.00000045827, 5.69296621745, 440.8252848776],
    [0.00000045293, 1.66856699796, 202.2533951741],
    [0.0000004233, 5.70768187703, 88.865680217],
    [0.0000003214, 0.07050050346, 63.7358983034],
    [0.00000031573, 1.67190022213, 302.164775655],
    [0.0000003115, 4.16379537691, 191.9584544356],
    [0.00000024631, 5.6556472857, 735.8765135318],
    [0.00000026558, 0.83256214407, 224.3447957019],
    [0.00000020108, 5.94364609981, 217.2312487011],
    [0.00000017511, 4.90014736798, 625.6701923124],
    [0.0000001713, 1.62593421274, 742.9900605326],
    [0.00000013744, 3.764971673, 195.1398481733],
    [0.00000012236, 4.71789723976, 203.0041546995],
    [0.0000001194, 0.12620714199, 234.6397364404],
    [0.0000001604, 0.57886320845, 515.463871093],
    [0.00000011154, 5.9221684478, 536.8045120954],
    [0.00000014068, 0.206752937, 838.9692877504],
    [0.00000011013, 5.60207982774, 728.762966531],
    [0.00000011718, 3.12098483554, 846.0828347512],
    [0.00000009962, 4.15472049127, 860.3099287528],
    [0.00000010601, 3.20327613035, 1066.49547719],
    [0.00000010072, 0.25709351996, 330.6189636582],
    [0.0000000949, 0.46379969328, 956.2891559706],
    [0.0000001024, 4.9873665607, 422.6660376129],
    [0.00000008287, 2.13990364272, 269.9214467406],
    [0.00000007238, 5.39724715258, 1052.2683831884],
    [0.0000000773, 5.24602742309, 429.7795846137],
    [0.00000006353, 4.46211130731, 284.1485407422],
    [0.00000005935, 5.40967847103, 149.5631971346],
    [0.0000000755, 4.03401153929, 9.5612275556],
    [0.00000005779, 4.2938089111, 415.5524906121],
    [0.00000006082, 5.93416924841, 405.2575498736],
    [0.00000005711, 0.01824076994, 124.433415221],
    [0.00000005676, 6.0223568215, 223.5940361765],
    [0.00000004757, 4.92804854717, 654.1243803156],
    [0.00000004727, 2.27461984667, 18.1592472647],
    [0.00000004509, 4.40688707557, 942.062061969],
    [0.00000005621, 0.29694719379, 127.4717966068],
    [0.00000005453, 5.53868222772, 949.1756089698],
    [0.0000000413, 4.68673560379, 74.7815985673],
    [0.00000004098, 5.308512622, 1045.1548361876],
    [0.00000004223, 2.89014939299, 56.6223513026],
    [0.00000004887, 3.20022991216, 277.0349937414],
    [0.00000003905, 3.30270187305, 490.3340891794],
    [0.00000003923, 6.09732996823, 81.7521332162],
    [0.00000003755, 4.93065184796, 52.6901980395],
    [0.00000004602, 6.13908576681, 1155.361157407],
    [0.00000003714, 0.40648076787, 137.0330241624],
    [0.00000003407, 4.28514461015, 99.9113804809],
    [0.00000003579, 0.20402442077, 1272.6810256272],
    [0.00000003946, 0.36500928968, 12.5301729722],
    [0.00000003246, 1.56761884227, 1059.3819301892],
    [0.00000004063, 0.29084229143, 831.8557407496],
    [0.00000003688, 0.15467406177, 437.6438911399],
    [0.00000002895, 3.13473183482, 70.8494453042],
    [0.000000028, 0.32727938074, 191.2076949102],
    [0.00000002672, 1.87612402267, 295.0512286542],
    [0.00000003454, 4.77197610696, 423.4167971383],
    [0.00000002623, 5.15237415384, 1368.660252845],
    [0.00000002457, 3.89612890177, 210.8514148832],
    [0.00000002461, 1.5852287676, 32.2433289144],
    [0.00000002595, 3.59007068361, 131.4039498699],
    [0.00000002289, 4.76825865118, 351.8165923087],
    [0.00000002357, 5.83099000562, 106.2741679563],
    [0.00000002221, 5.98277491515, 6062.6632075526],
    [0.00000002221, 2.05930402282, 6076.8903015542],
    [0.00000002183, 5.94985336393, 145.6310438715],
    [0.00000002718, 3.37801252354, 408.4389436113],
    [0.00000002288, 3.1400061932, 22.0914005278],
    [0.0000000209, 1.12304173562, 9992.8729037722],
    [0.00000002089, 3.48276230686, 10007.0999977738],
    [0.0000000257, 5.12167203704, 265.9892934775],
    [0.00000001835, 4.15379879659, 1258.4539316256],
    [0.0000000182, 5.05340615445, 1361.5467058442],
    [0.0000000176, 4.13532689228, 107.0249274817],
    [0.00000001921, 4.51790997496, 138.5174968707],
    [0.00000001707, 1.3586459328, 231.4583427027],
    [0.00000001956, 5.87006093798, 1471.7530270636],
    [0.00000002133, 5.2340984872, 1265.5674786264],
    [0.00000001595, 5.61962698786, 447.9388318784],
    [0.00000001609, 3.74893709671, 628.8515860501],
    [0.0000000149, 0.4835240494, 340.7708920448],
    [0.0000000156, 5.97095003614, 430.5303441391],
    [0.00000001352, 0.71405348653, 28.4541880032],
    [0.00000001355, 2.91219493604, 215.7467759928],
    [0.00000001298, 5.84254169775, 543.9180590962],
    [0.00000001664, 6.23834873469, 1148.2476104062],
    [0.00000001205, 2.83373725021, 200.7689224658],
    [0.00000001192, 3.52219428945, 497.4476361802],
    [0.00000001122, 2.6057103027, 1279.794572628],
    [0.00000001217, 6.23528359211, 1589.0728952838],
    [0.0000000142, 0.85079202155, 6069.7767545534],
    [0.0000000112, 4.95656566453, 1685.0521225016],
    [0.0000000101, 3.39689646619, 1073.6090241908],
    [0.00000001352, 2.27575429523, 9999.986450773],
    [0.00000000979, 1.58571463442, 1375.7737998458],
    [0.00000001159, 0.71823181781, 508.3503240922],
    [0.00000001014, 2.40759054741, 703.6331846174],
    [0.00000000956, 2.66256831556, 134.5853436076],
    [0.0000000111, 1.19713920197, 618.5566453116],
    [0.00000000945, 4.68155456977, 362.8622925726],
    [0.00000000953, 4.20749172571, 288.0806940053],
    [0.00000001033, 1.08781255146, 184.8449074348],
    [0.00000000942, 2.4346522346, 222.8603229936],
    [0.00000000909, 4.5176938536, 38.1330356378],
    [0.00000001002, 1.38543153271, 483.2205421786],
    [0.00000001082, 4.52832816548, 635.9651330509],
    [0.00000001008, 4.91325851448, 750.1036075334],
    [0.00000000862, 4.79998518474, 1677.9385755008],
    [0.00000000828, 2.21940849017, 333.657345044],
    [0.00000000745, 3.97279299984, 1574.8458012822],
    [0.00000000903, 5.58963782799, 1788.1448967202],
    [0.00000000735, 2.28191723259, 1162.4747044078],
    [0.00000000773, 5.82270096882, 416.3032501375],
    [0.00000000734, 2.35356586018, 120.358249606],
    [0.00000000745, 4.84266000843, 76.2660712756],
    [0.00000000765, 2.50840146722, 343.2185725996],
    [0.00000000908, 5.01046293458, 1581.959348283],
    [0.00000000707, 3.66631544506, 347.8844390456],
    [0.0000000087, 0.77106152694, 113.3877149571],
    [0.00000000686, 2.88543836068, 92.0470739547],
    [0.00000000673, 3.75650667651, 203.7378678824],
    [0.00000000656, 3.77718582702, 217.964961884],
    [0.00000000675, 5.62875135263, 17.2654753874],
    [0.00000000691, 0.21330089609, 99.1606209555],
    [0.00000000786, 4.49318079175, 643.0786800517],
    [0.00000000641, 0.67588390141, 46.470422916],
    [0.00000000663, 5.74837848383, 721.6494195302],
    [0.00000000809, 5.94893988352, 1464.6394800628],
    [0.00000000638, 4.86195439622, 357.4456666012],
    [0.0000000074, 6.00053422445, 337.732510659],
    [0.00000000555, 4.95858934298, 358.9301393095],
    [0.00000000581, 3.87669679805, 565.1156877467],
    [0.00000000541, 1.22296838713, 62.2514255951],
    [0.00000000697, 0.00715950269, 1169.5882514086],
    [0.00000000524, 1.53830423608, 195.8906076987],
    [0.00000000518, 5.41992758537, 312.1990839626],
    [0.00000000626, 5.26580317026, 436.8931316145],
    [0.00000000537, 6.170316576, 182.279606801],
    [0.00000000574, 5.98607898826, 1905.4647649404],
    [0.00000000541, 0.30589337713, 98.8999885246],
    [0.00000000603, 3.26888470585, 208.633228992],
    [0.00000000504, 3.80930996688, 168.0525127994],
    [0.00000000477, 3.56642391994, 563.6312150384],
    [0.00000000511, 4.70719837179, 2001.4439921582],
    [0.00000000475, 1.06025557585, 5856.4776591154],
    [0.0000000054, 0.87230551412, 1692.1656695024],
    [0.00000000454, 2.48128029368, 9786.687355335],
    [0.00000000456, 3.18303484133, 218.9281697305],
    [0.00000000462, 0.71358186864, 258.8757464767],
    [0.00000000424, 4.89778948357, 636.7158925763],
    [0.00000000537, 2.59376221736, 313.2104759189],
    [0.0000000041, 4.22147787617, 867.4234757536],
    [0.00000000408, 3.06057772788, 424.1505103212],
    [0.00000000407, 3.79376013938, 24.3790223882],
    [0.00000000569, 3.68547825941, 350.3321196004],
    [0.00000000404, 0.91401255827, 114.1384744825],
    [0.00000000395, 3.50478374207, 129.9194771616],
    [0.00000000395, 2.86309689622, 212.3358875915],
    [0.00000000386, 5.00762729432, 388.4651552382],
    [0.00000000393, 6.26835522096, 241.7532834412],
    [0.00000000401, 4.60258908692, 1994.3304451574],
    [0.00000000385, 0.91582119643, 160.6088973985],
    [0.00000000467, 0.54876489832, 404.5067903482],
    [0.00000000368, 0.35674031808, 214.2623032845],
    [0.00000000471, 0.67360047481, 207.8824694666],
    [0.00000000379, 0.92901327825, 767.3690829208],
    [0.0000000042, 5.69797398044, 225.8292684102],
    [0.00000000356, 3.10092792842, 842.1506814881],
    [0.00000000428, 5.35375368944, 2104.5367663768],
    [0.00000000422, 2.67975581832, 77.962992305],
    [0.0000000037, 5.46144813372, 1038.0412891868],
    [0.00000000379, 5.56429091578, 131.5469622218],
    [0.00000000441, 5.68196668399, 1781.0313497194],
    [0.00000000361, 5.20616019966, 629.6023455755],
    [0.00000000341, 5.92928351979, 26.826702943],
    [0.00000000419, 5.26851686707, 85.8272988312],
    [0.00000000322, 0.80223983857, 6283.0758499914],
    [0.00000000323, 3.86700993914, 576.1613880106],
    [0.00000000321, 2.1718603297, 10213.285546211],
    [0.00000000355, 2.80560859177, 344.7030453079],
    [0.00000000311, 3.77477255556, 1891.2376709388],
    [0.00000000318, 5.22020784209, 142.4496501338],
    [0.00000000315, 0.52272202855, 5849.3641121146],
    [0.00000000428, 4.63722058283, 1898.3512179396],
    [0.00000000337, 0.68198429948, 45.5766510387],
    [0.00000000316, 0.54074780109, 444.7574381407],
    [0.0000000031, 1.41032075652, 273.1028404783],
    [0.00000000311, 3.5374455623, 251.4321310758],
    [0.00000000295, 1.93253015677, 436.1594184316],
    [0.00000000296, 1.97705648834, 9779.5738083342],
    [0.00000000326, 3.67854047003, 963.4027029714],
    [0.00000000389, 5.76841276132, 39.3568759152],
    [0.00000000277, 5.73995694175, 92.7978334801],
    [0.00000000315, 4.96371610197, 757.2171545342],
    [0.00000000295, 1.816388339, 1493.093668066],
    [0.00000000287, 0.97698377929, 685.4739373527],
    [0.00000000281, 2.66463042095, 1286.9081196288],
    [0.0000000033, 5.7977692276, 650.9429865779],
    [0.00000000292, 3.97858181479, 472.1748419147],
    [0.00000000266, 4.1371611132, 601.7642506762],
    [0.00000000262, 0.91887592474, 245.5424243524],
    [0.00000000278, 3.08964256591, 778.4147831847],
    [0.00000000277, 3.0875091688, 621.7380390493],
    [0.00000000255, 3.93981592051, 181.0557665236],
    [0.00000000333, 2.04835822938, 561.1835344836],
    [0.00000000247, 2.92754257675, 219.4494345923],
    [0.00000000306, 0.36127922606, 824.7421937488],
    [0.00000000253, 1.80130756458, 5643.1785636774],
    [0.00000000337, 4.97764462199, 175.1660598002],
    [0.00000000273, 0.66599369335, 2008.557539159],
    [0.00000000227, 4.87285356383, 661.2379273164],
    [0.00000000249, 3.14202895058, 144.1465711632],
    [0.0000000022, 3.93526603081, 319.5732633943],
    [0.00000000212, 5.85248164087, 546.956440482],
    [0.00000000234, 1.65314711167, 554.0699874828],
    [0.00000000204, 0.88373842674, 31.492569389],
    [0.00000000205, 2.93169866171, 1596.1864422846],
    [0.00000000201, 3.36504567824, 1080.7225711916],
    [0.00000000224, 4.34612745705, 1382.8873468466],
    [0.00000000192, 5.13697232918, 329.7251917809],
    [0.00000000208, 3.08549771485, 41.6444977756],
    [0.00000000236, 0.0799874286, 1141.1340634054],
    [0.00000000203, 4.13011580915, 2627.1141844706],
    [0.00000000203, 0.13969067385, 1485.9801210652],
    [0.00000000204, 3.38137545713, 699.7010313543],
    [0.00000000212, 4.52370676085, 2310.722314814],
    [0.00000000218, 5.79277335862, 2221.856634597],
    [0.00000000213, 0.50441377637, 934.9485149682],
    [0.0000000021, 5.04017633795, 2420.9286360334],
    [0.00000000214, 4.64286758581, 2317.8358618148],
    [0.00000000178, 0.84588580004, 128.3655684841],
    [0.0000000017, 2.75006619605, 710.7467316182],
    [0.00000000171, 4.32615182967, 291.262087743],
    [0.00000000172, 3.4697130692, 501.3797894433],
    [0.0000000017, 1.05408992106, 526.5095713569],
    [0.00000000162, 1.1568304295, 519.3960243561],
    [0.0000000018, 4.96266204107, 1670.8250285],
    [0.00000000172, 1.65385549578, 916.9322800554],
    [0.0000000017, 2.30821101766, 429.0458714308],
    [0.0000000017, 5.98716489326, 643.8294395771],
    [0.00000000173, 5.19933564968, 1354.4331588434],
    [0.00000000195, 4.50165508529, 2214.7430875962],
    [0.00000000156, 4.16290662749, 572.2292347475],
    [0.00000000153, 1.23776248578, 2413.8150890326],
    [0.0000000015, 0.63076983213, 1478.8665740644],
    [0.00000000169, 4.28090123029, 305.3461693927],
    [0.00000000174, 6.23077892653, 3384.3313390048],
    [0.00000000149, 3.13274908516, 9573.388259897],
    [0.00000000162, 6.25601818345, 213.2509113282],
    [0.00000000149, 4.81749019484, 945.9942152321],
    [0.00000000162, 0.8861012919, 216.2198567448],
    [0.00000000133, 2.31915371262, 156.6767441354],
    [0.00000000165, 6.06456216591, 732.6951197941],
    [0.00000000141, 6.14293754333, 1795.258443721],
    [0.00000000133, 0.06530337135, 218.7157214094],
    [0.00000000162, 3.17058130506, 213.3472795478],
    [0.00000000125, 2.07143636845, 425.1137181677],
    [0.00000000146, 1.88627500632, 211.8146227297],
    [0.00000000113, 2.79541965778, 235.3904959658],
    [0.00000000117, 0.76464798684, 479.2883889155],
    [0.00000000108, 3.95650672786, 570.7447620392],
    [0.00000000106, 0.12820734703, 188.0263011725],
    [0.00000000134, 3.58244908862, 849.2642284889],
    [0.00000000114, 0.25990388555, 398.1440028728],
    [0.00000000112, 2.39181495831, 217.491881132],
    [0.00000000091, 2.50716605179, 121.2520214833],
    [0.00000000091, 1.75367948574, 213.8203602998],
    [0.00000000088, 5.26121947108, 395.578702239],
    [0.00000000096, 3.98832609364, 289.5651667136],
    [0.00000000091, 0.35318362186, 312.4597163935],
    [0.00000000112, 1.14387590923, 1802.3719907218],
    [0.00000000082, 3.73605217214, 207.6700211455],
    [0.00000000082, 6.06283262812, 210.3783341312],
    [0.00000000084, 3.34470673492, 67.6680515665],
    [0.00000000086, 2.7391730018, 5863.5912061162],
    [0.00000000083, 2.81499116485, 776.9303104764],
    [0.00000000091, 1.2616009317, 212.7778305762],
    [0.0000000009, 2.08722491981, 2111.6503133776],
    [0.0000000008, 2.13136842916, 421.93232443],
    [0.00000000082, 4.16358350281, 9793.8009023358],
    [0.00000000077, 2.96973341607, 431.264057322],
    [0.00000000079, 3.42790361067, 417.0369633204],
    [0.00000000079, 3.18693585419, 320.3240229197],
    [0.0000000008, 0.78975763683, 204.7010757289],
    [0.00000000077, 1.89354243952, 556.5176680376],
    [0.00000000073, 4.85923277221, 2118.7638603784],
    [0.00000000071, 3.64551577433, 198.321241911],
];

const L3: &[Term] = &[
    [0.00016038734, 5.73945377424, 7.1135470008],
    [0.00004249793, 4.58539675603, 213.299095438],
    [0.00001906524, 4.76082050205, 220.4126424388],
    [0.00001465687, 5.91326678323, 206.1855484372],
    [0.00001162041, 5.61973132428, 14.2270940016],
    [0.00001066581, 3.60816533142, 426.598190876],
    [0.00000239377, 3.86088273439, 433.7117378768],
    [0.00000236975, 5.76826451465, 199.0720014364],
    [0.00000165641, 5.11641150216, 3.1813937377],
    [0.00000131409, 4.74327544615, 227.5261894396],
    [0.00000151352, 2.73594641861, 639.897286314],
    [0.0000006163, 4.74287052463, 103.0927742186],
    [0.00000063365, 0.22850089497, 419.4846438752],
    [0.00000040437, 5.47298059144, 21.3406410024],
    [0.00000040205, 5.9642026672, 95.9792272178],
    [0.00000038746, 5.83386199529, 110.2063212194],
    [0.00000028025, 3.01235311514, 647.0108333148],
    [0.00000025029, 0.9880817074, 3.9321532631],
    [0.00000018101, 1.02506397063, 412.3710968744],
    [0.00000017879, 3.31913418974, 309.2783226558],
    [0.00000016208, 3.89825272754, 440.8252848776],
    [0.00000015763, 5.61667809625, 117.3198682202],
    [0.00000019014, 1.91614237463, 853.196381752],
    [0.00000018262, 4.96738415934, 10.2949407385],
    [0.00000012947, 1.18068953942, 88.865680217],
    [0.00000017919, 4.20376505349, 216.4804891757],
    [0.00000011453, 5.57520615096, 11.0457002639],
    [0.00000010548, 5.92906266269, 191.9584544356],
    [0.00000010389, 3.94838736947, 209.3669421749],
    [0.0000000865, 3.39335369698, 302.164775655],
    [0.0000000758, 4.87736913157, 323.5054166574],
    [0.00000006697, 0.38198725552, 632.7837393132],
    [0.00000005864, 1.05621157685, 210.1177017003],
    [0.00000005449, 4.64268475485, 234.6397364404],
    [0.00000006327, 2.25492722762, 522.5774180938],
    [0.00000003602, 2.30677010956, 515.463871093],
    [0.00000003229, 2.20309400066, 860.3099287528],
    [0.00000003701, PI, 0.0],
    [0.00000002583, 4.93447677059, 224.3447957019],
    [0.00000002543, 0.42393884183, 625.6701923124],
    [0.00000002213, 3.19814958289, 202.2533951741],
    [0.00000002421, 4.76621391814, 330.6189636582],
    [0.0000000285, 0.5860439501, 529.6909650946],
    [0.00000001965, 4.39525359412, 124.433415221],
    [0.00000002154, 1.35488209144, 405.2575498736],
    [0.00000002296, 3.34809165905, 429.7795846137],
    [0.00000002018, 3.06693569701, 654.1243803156],
    [0.00000001979, 1.02981005658, 728.762966531],
    [0.00000001868, 3.09383546177, 422.6660376129],
    [0.00000001846, 4.1522598545, 536.8045120954],
    [0.00000002194, 1.18918501013, 1066.49547719],
    [0.0000000209, 4.15631351317, 223.5940361765],
    [0.00000001481, 0.37916705169, 316.3918696566],
    [0.0000000172, 5.82865773356, 195.1398481733],
    [0.0000000146, 1.57663426355, 81.7521332162],
    [0.00000001623, 6.03706764648, 742.9900605326],
    [0.00000001286, 1.66154726117, 63.7358983034],
    [0.00000001304, 5.02409881054, 956.2891559706],
    [0.00000001446, 2.10575519127, 838.9692877504],
    [0.00000001245, 3.8810975277, 269.9214467406],
    [0.00000001018, 3.72599601656, 295.0512286542],
    [0.00000001323, 1.38492882986, 735.8765135318],
    [0.00000001318, 2.33460998999, 217.2312487011],
    [0.00000000943, 2.75813531246, 284.1485407422],
    [0.00000000906, 0.71155526266, 846.0828347512],
    [0.00000000886, 3.83754799777, 447.9388318784],
    [0.00000000943, 3.31480217015, 18.1592472647],
    [0.000000008, 4.71386673963, 56.6223513026],
    [0.00000000908, 2.02119147951, 831.8557407496],
    [0.00000000787, 0.80410269937, 1045.1548361876],
    [0.00000000709, 4.27064410504, 437.6438911399],
    [0.00000000651, 6.17565900032, 942.062061969],
    [0.00000000785, 2.40767785311, 203.0041546995],
    [0.00000000702, 1.64585301418, 423.4167971383],
    [0.00000000543, 2.86326941725, 184.8449074348],
    [0.00000000532, 6.25762144463, 1059.3819301892],
    [0.00000000521, 3.43013038466, 149.5631971346],
    [0.00000000484, 4.8836606072, 1272.6810256272],
    [0.00000000437, 5.40220619672, 408.4389436113],
    [0.00000000388, 2.57589594168, 508.3503240922],
    [0.00000000421, 4.05836524024, 543.9180590962],
    [0.00000000375, 1.22747948298, 2324.9494088156],
    [0.00000000347, 0.59237194522, 22.0914005278],
    [0.00000000433, 1.69090148012, 1155.361157407],
    [0.00000000389, 1.46170367972, 1073.6090241908],
    [0.00000000307, 1.82185086955, 628.8515860501],
    [0.00000000409, 1.21858750514, 1052.2683831884],
    [0.00000000309, 0.33610530663, 6076.8903015542],
    [0.00000000309, 1.42279282226, 6062.6632075526],
    [0.0000000034, 1.8332577031, 1141.1340634054],
    [0.00000000303, 2.4158474733, 127.4717966068],
    [0.00000000305, 5.34154702988, 131.4039498699],
    [0.00000000298, 2.28594631393, 635.9651330509],
    [0.00000000372, 1.0372391139, 313.2104759189],
    [0.00000000338, 0.69100012338, 1361.5467058442],
    [0.00000000325, 1.78816356937, 1148.2476104062],
    [0.00000000322, 1.1862880501, 721.6494195302],
    [0.00000000271, 2.4566315646, 415.5524906121],
    [0.00000000251, 3.12046701975, 1382.8873468466],
    [0.00000000254, 3.00353256829, 618.5566453116],
    [0.00000000295, 0.35280179538, 2730.2069586892],
    [0.00000000242, 1.52154324392, 70.8494453042],
    [0.00000000296, 0.89576757167, 2104.5367663768],
    [0.00000000264, 3.00987438634, 661.2379273164],
    [0.00000000267, 0.31623829657, 1677.9385755008],
    [0.0000000027, 2.56774718753, 643.0786800517],
    [0.00000000261, 1.55058302472, 1457.525933062],
    [0.00000000246, 2.29214585472, 867.4234757536],
    [0.00000000269, 3.18157515051, 750.1036075334],
    [0.00000000272, 1.12208982319, 1788.1448967202],
    [0.00000000256, 0.37673546414, 1279.794572628],
    [0.00000000206, 1.81129778306, 497.4476361802],
    [0.00000000251, 0.61933213502, 2413.8150890326],
    [0.00000000237, 3.35941544147, 436.8931316145],
    [0.00000000247, 0.10102936687, 99.9113804809],
    [0.00000000247, 0.93125798111, 52.6901980395],
    [0.00000000221, 2.07880035795, 824.7421937488],
    [0.00000000197, 6.16682223437, 1258.4539316256],
    [0.00000000229, 5.5791753484, 2943.5060541272],
    [0.00000000227, 0.43324651601, 2737.32050569],
    [0.00000000203, 4.12623986247, 337.732510659],
    [0.00000000214, 3.57607524509, 934.9485149682],
    [0.00000000212, 1.25688162158, 1773.9178027186],
    [0.00000000215, 0.8886764788, 1038.0412891868],
    [0.00000000244, 5.5157208457, 231.4583427027],
    [0.00000000181, 2.13821830481, 416.3032501375],
    [0.0000000021, 4.19139167658, 2221.856634597],
    [0.00000000178, 2.91685344537, 74.7815985673],
    [0.00000000201, 0.46214583002, 2854.6403739102],
    [0.00000000236, 4.64388694899, 1905.4647649404],
    [0.00000000199, 1.54991619669, 1471.7530270636],
    [0.00000000199, 0.70725247497, 2420.9286360334],
    [0.00000000162, 2.5148834502, 430.5303441391],
    [0.0000000016, 1.23508694599, 1596.1864422846],
    [0.00000000175, 4.14605894816, 2090.3096723752],
    [0.00000000152, 0.05796022559, 32.2433289144],
    [0.00000000176, 1.29002070623, 490.3340891794],
    [0.00000000154, 3.60622857548, 650.9429865779],
    [0.00000000185, 4.74969742128, 319.5732633943],
    [0.00000000154, 1.54587199996, 1464.6394800628],
    [0.00000000108, 4.251257865, 145.6310438715],
    [0.00000000106, 1.04047809351, 1162.4747044078],
    [0.00000000114, 2.640557371, 362.8622925726],
    [0.00000000093, 3.36746275886, 483.2205421786],
    [0.00000000091, 2.05796248692, 210.8514148832],
    [0.00000000091, 4.53336314765, 241.7532834412],
    [0.00000000072, 3.74361312157, 1485.9801210652],
    [0.00000000076, 3.33892447677, 195.8906076987],
];

const L4: &[Term] = &[
    [0.00001661894, 3.99826248978, 7.1135470008],
    [0.00000257107, 2.98436499013, 220.4126424388],
    [0.00000236344, 3.90241428075, 14.2270940016],
    [0.00000149418, 2.74110824208, 213.299095438],
    [0.00000109598, 1.51515739251, 206.1855484372],
    [0.00000113953, PI, 0.0],
    [0.0000006839, 1.72120953337, 426.598190876],
    [0.00000037699, 1.23795458356, 199.0720014364],
    [0.0000004006, 2.04644897412, 433.7117378768],
    [0.00000031219, 3.0109418409, 227.5261894396],
    [0.00000015111, 0.82897064529, 639.897286314],
    [0.00000009444, 3.71485300868, 21.3406410024],
    [0.0000000569, 2.41995290633, 419.4846438752],
    [0.0000000447, 1.45120818748, 95.9792272178],
    [0.00000005608, 1.1560709574, 647.0108333148],
    [0.00000004463, 2.11783225176, 440.8252848776],
    [0.00000003229, 4.09278077834, 110.2063212194],
    [0.00000002871, 2.77203153866, 412.3710968744],
    [0.00000002796, 3.00730249564, 88.865680217],
    [0.00000002638, 0.00255721254, 853.196381752],
    [0.00000002574, 0.39246854091, 103.0927742186],
    [0.00000001862, 5.07955457727, 309.2783226558],
    [0.00000002225, 3.77689198137, 117.3198682202],
    [0.00000001769, 5.19176876406, 302.164775655],
    [0.00000001921, 2.82884328662, 234.6397364404],
    [0.00000001805, 2.23816036743, 216.4804891757],
    [0.00000001211, 1.54685246534, 191.9584544356],
    [0.00000000765, 3.44501766503, 323.5054166574],
    [0.00000000763, 4.83197222448, 210.1177017003],
    [0.00000000613, 4.19052656353, 515.463871093],
    [0.00000000648, 2.28591710303, 209.3669421749],
    [0.00000000616, 4.03194472161, 522.5774180938],
    [0.0000000063, 2.37952532019, 632.7837393132],
    [0.00000000639, 0.29772678242, 860.3099287528],
    [0.00000000559, 2.1711006053, 124.433415221],
    [0.00000000442, 2.23500083592, 447.9388318784],
    [0.00000000407, 5.4451597099, 1066.49547719],
    [0.00000000469, 1.26889429317, 654.1243803156],
    [0.00000000488, 3.20329778617, 405.2575498736],
    [0.00000000415, 3.12435410343, 330.6189636582],
    [0.00000000442, 3.38933498625, 81.7521332162],
    [0.00000000332, 4.12464206608, 838.9692877504],
    [0.0000000032, 3.18332026736, 529.6909650946],
    [0.00000000312, 1.40962796637, 429.7795846137],
    [0.00000000291, 3.18885372262, 1464.6394800628],
    [0.00000000333, 2.94355912397, 728.762966531],
    [0.00000000235, 3.67049647573, 1148.2476104062],
    [0.00000000286, 2.57895004576, 1045.1548361876],
    [0.00000000223, 3.57980034401, 1155.361157407],
    [0.00000000261, 2.04564143519, 1677.9385755008],
    [0.00000000218, 2.61967125327, 536.8045120954],
    [0.00000000262, 2.48322150677, 625.6701923124],
    [0.00000000191, 4.39064160974, 1574.8458012822],
    [0.00000000176, 1.26161895188, 422.6660376129],
    [0.0000000019, 2.326931712, 223.5940361765],
    [0.00000000185, 1.08713469614, 742.9900605326],
    [0.00000000168, 0.69946458053, 824.7421937488],
    [0.00000000177, 5.02663339078, 203.0041546995],
    [0.00000000218, 0.40426546037, 867.4234757536],
    [0.00000000178, 3.67593243311, 831.8557407496],
    [0.00000000175, 5.75326979098, 1073.6090241908],
    [0.00000000156, 3.02120117572, 1781.0313497194],
    [0.00000000148, 2.28313808274, 295.0512286542],
    [0.0000000015, 3.48436135302, 956.2891559706],
    [0.00000000152, 1.91404443241, 942.062061969],
    [0.00000000146, 6.1651969664, 316.3918696566],
    [0.00000000096, 2.93247663741, 224.3447957019],
    [0.00000000088, 4.48383632427, 423.4167971383],
];

const L5: &[Term] = &[
    [0.00000123615, 2.25923345732, 7.1135470008],
    [0.0000003419, 2.16250652689, 14.2270940016],
    [0.00000027546, 1.19868150215, 220.4126424388],
    [0.00000005818, 1.21584270184, 227.5261894396],
    [0.00000005318, 0.23550400093, 433.7117378768],
    [0.00000003677, 6.22669694355, 426.598190876],
    [0.00000003057, 2.97372046322, 199.0720014364],
    [0.00000002861, 4.28710932685, 206.1855484372],
    [0.00000001617, 6.25265362286, 213.299095438],
    [0.00000001279, 5.27612561266, 639.897286314],
    [0.00000000932, 5.56741549127, 647.0108333148],
    [0.00000000756, 6.17716234487, 191.9584544356],
    [0.0000000076, 0.69475544472, 302.164775655],
    [0.00000001038, 0.23516951637, 440.8252848776],
    [0.00000001007, PI, 0.0],
    [0.00000000549, 4.87733288264, 88.865680217],
    [0.00000000504, 4.77955496203, 419.4846438752],
    [0.00000000346, 4.31847547394, 853.196381752],
    [0.00000000392, 5.69922389094, 654.1243803156],
    [0.00000000242, 2.05052677361, 323.5054166574],
    [0.00000000266, 1.11384528244, 234.6397364404],
    [0.00000000199, 0.88505901097, 309.2783226558],
    [0.00000000258, 5.10074489186, 95.9792272178],
    [0.00000000166, 2.40063312194, 515.463871093],
    [0.00000000155, 4.70433216164, 860.3099287528],
    [0.00000000089, 1.3637107038, 412.3710968744],
    [0.00000000102, 0.49450039082, 117.3198682202],
];

const B0: &[Term] = &[
    [0.0433067804, 3.60284428399, 213.299095438],
    [0.00240348303, 2.8523848939, 426.598190876],
    [0.00084745939, 0.0, 0.0],
    [0.00030863357, 3.48441504465, 220.4126424388],
    [0.00034116063, 0.57297307844, 206.1855484372],
    [0.0001473407, 2.1184659787, 639.897286314],
    [0.00009916668, 5.79003189405, 419.4846438752],
    [0.00006993564, 4.73604689179, 7.1135470008],
    [0.00004807587, 5.43305315602, 316.3918696566],
    [0.00004788392, 4.9651292742, 110.2063212194],
    [0.00003432125, 2.73255752123, 433.7117378768],
    [0.00001506129, 6.01304536144, 103.0927742186],
    [0.00001060298, 5.63099292414, 529.6909650946],
    [0.00000969071, 5.20434966103, 632.7837393132],
    [0.0000094205, 1.39646678088, 853.196381752],
    [0.00000707645, 3.80302329547, 323.5054166574],
    [0.00000552313, 5.13149109045, 202.2533951741],
    [0.00000399675, 3.35891413961, 227.5261894396],
    [0.00000316063, 1.99716764199, 647.0108333148],
    [0.0000031938, 3.6257155098, 209.3669421749],
    [0.00000284494, 4.88648481625, 224.3447957019],
    [0.00000314225, 0.4651027241, 217.2312487011],
    [0.00000236442, 2.13887472281, 11.0457002639],
    [0.00000215354, 5.94982610103, 846.0828347512],
    [0.00000208522, 2.12003893769, 415.5524906121],
    [0.00000178958, 2.95361514672, 63.7358983034],
    [0.00000207213, 0.73021462851, 199.0720014364],
    [0.0000013914, 1.9982199094, 735.8765135318],
    [0.00000134884, 5.24500819605, 742.9900605326],
    [0.00000140585, 0.64417620299, 490.3340891794],
    [0.00000121669, 3.11537140876, 522.5774180938],
    [0.0000013924, 4.59535168021, 14.2270940016],
    [0.00000115524, 3.10891547171, 216.4804891757],
    [0.00000114218, 0.96261442133, 210.1177017003],
    [0.00000096376, 4.48164339766, 117.3198682202],
    [0.00000080593, 1.3169275015, 277.0349937414],
    [0.00000072952, 3.0598848237, 536.8045120954],
    [0.00000069261, 4.92378633635, 309.2783226558],
    [0.00000074302, 2.8937653962, 149.5631971346],
    [0.0000006804, 2.18002263974, 351.8165923087],
    [0.00000061734, 0.67728106562, 1066.49547719],
    [0.00000056598, 2.60963391288, 440.8252848776],
    [0.00000048864, 5.78725874107, 95.9792272178],
    [0.00000048243, 2.1821183743, 74.7815985673],
    [0.00000038304, 5.29151303843, 1059.3819301892],
    [0.00000036323, 1.63348365121, 628.8515860501],
    [0.00000035055, 1.71279210041, 1052.2683831884],
    [0.0000003427, 2.45740470599, 422.6660376129],
    [0.00000034313, 5.97994514798, 412.3710968744],
    [0.00000033787, 1.14073392951, 949.1756089698],
    [0.00000031633, 4.14722153007, 437.6438911399],
    [0.00000036833, 6.27769966148, 1162.4747044078],
    [0.0000002698, 1.2715481681, 860.3099287528],
    [0.00000023516, 2.74936525342, 838.9692877504],
    [0.0000002346, 0.98962849901, 210.8514148832],
    [0.000000236, 4.11386961467, 3.9321532631],
    [0.00000023631, 3.07427204313, 215.7467759928],
    [0.00000020813, 3.51084686918, 330.6189636582],
    [0.00000019509, 2.81857577372, 127.4717966068],
    [0.00000017103, 3.89784279922, 214.2623032845],
    [0.00000017635, 6.19715516746, 703.6331846174],
    [0.00000017824, 2.28524493886, 388.4651552382],
    [0.00000020935, 0.14356167048, 430.5303441391],
    [0.00000016551, 1.66649120724, 38.1330356378],
    [0.000000191, 2.97699096081, 137.0330241624],
    [0.00000015517, 4.54798410406, 956.2891559706],
    [0.00000017065, 0.16611115812, 212.3358875915],
    [0.00000014169, 0.48937283445, 213.3472795478],
    [0.00000019027, 6.27326062836, 423.4167971383],
    [0.00000013344, 2.37136126257, 429.7795846137],
    [0.00000012565, 1.03178071173, 563.6312150384],
    [0.00000014173, 3.57477564831, 213.2509113282],
    [0.00000011374, 1.45300927024, 1368.660252845],
    [0.00000010585, 6.1763342593, 200.7689224658],
    [0.000000106, 3.84358958373, 138.5174968707],
    [0.00000010263, 2.17423692422, 76.2660712756],
    [0.00000010072, 1.33197220789, 565.1156877467],
    [0.00000012058, 0.441492427, 222.8603229936],
    [0.00000010367, 1.85278552549, 350.3321196004],
    [0.00000008706, 2.58144528603, 1155.361157407],
    [0.0000000847, 1.97890349826, 625.6701923124],
    [0.00000008518, 4.51649648578, 3.1813937377],
    [0.00000007439, 4.92597321442, 212.7778305762],
    [0.00000007409, 2.03506679104, 288.0806940053],
    [0.00000008137, 3.98500592467, 85.8272988312],
    [0.00000007985, 2.20794292064, 362.8622925726],
    [0.0000000661, 6.14944028835, 417.0369633204],
    [0.00000007753, 6.2366454907, 1478.8665740644],
    [0.00000006318, 1.87388481013, 654.1243803156],
    [0.00000006319, 1.17328438271, 1265.5674786264],
    [0.00000005841, 2.35829915285, 750.1036075334],
    [0.00000005808, 5.01602242794, 479.2883889155],
    [0.00000008079, 0.42574715104, 554.0699874828],
    [0.00000006014, 5.58952234348, 425.1137181677],
    [0.00000007444, 5.41859596459, 213.8203602998],
    [0.00000007567, 2.68446523795, 191.2076949102],
    [0.00000007421, 4.19354269508, 9.5612275556],
    [0.00000005466, 3.21737829505, 234.6397364404],
    [0.00000005661, 1.4698271355, 265.9892934775],
    [0.00000005851, 4.81776629912, 1.4844727083],
    [0.00000005341, 3.45755372717, 203.7378678824],
    [0.0000000496, 1.04628615559, 12.5301729722],
    [0.0000000492, 3.85622235967, 173.9422195228],
    [0.00000004883, 1.94823282939, 195.1398481733],
    [0.00000005621, 0.81869581274, 52.6901980395],
    [0.000000052, 3.32827437636, 515.463871093],
    [0.00000004927, 3.81806549732, 225.8292684102],
    [0.00000005033, 0.10756875163, 252.6559713532],
    [0.00000004416, 5.45506938037, 408.4389436113],
    [0.00000004169, 1.21145214135, 1685.0521225016],
    [0.00000004066, 6.24213578122, 1279.794572628],
    [0.00000003972, 6.13850317719, 217.491881132],
    [0.00000005398, 5.67212179194, 1375.7737998458],
    [0.00000003916, 5.96105725915, 210.3783341312],
    [0.00000004017, 0.99840226682, 842.1506814881],
    [0.00000003899, 4.58983662507, 1272.6810256272],
    [0.00000003764, 3.30663337976, 212.5483359126],
    [0.00000004345, 3.1856224183, 414.0680179038],
    [0.00000003565, 4.75262007127, 207.8824694666],
    [0.00000003542, 2.30814954338, 1471.7530270636],
    [0.00000003732, 1.61040235688, 635.9651330509],
    [0.00000003709, 2.97082943086, 223.5940361765],
    [0.00000003576, 3.83436862558, 483.2205421786],
    [0.00000004053, 3.72105017218, 942.062061969],
    [0.00000003756, 0.74987556308, 214.0498549634],
    [0.00000003162, 3.64550741, 207.6700211455],
    [0.00000003149, 2.27647454229, 728.762966531],
    [0.00000003971, 4.37874143597, 216.2198567448],
    [0.00000003541, 5.62281936827, 218.7157214094],
    [0.00000002965, 3.40117024932, 650.9429865779],
    [0.00000003949, 4.1972891245, 209.106309744],
    [0.00000002853, 4.81077453523, 231.4583427027],
    [0.00000002826, 0.86682282341, 217.964961884],
    [0.0000000297, 5.75162134301, 160.6088973985],
    [0.00000002724, 0.47941267764, 497.4476361802],
    [0.00000002787, 4.03144791896, 62.2514255951],
    [0.00000002605, 5.04152791794, 65.2203710117],
    [0.00000002652, 0.30602610654, 424.1505103212],
    [0.00000002543, 2.76499056123, 543.9180590962],
    [0.00000002485, 5.78396049817, 99.1606209555],
    [0.00000003209, 0.42853440759, 218.9281697305],
    [0.00000002509, 2.947045891, 70.8494453042],
    [0.00000002308, 0.63861650866, 251.4321310758],
    [0.00000002869, 4.31959346745, 767.3690829208],
    [0.00000002232, 0.56929937568, 1073.6090241908],
    [0.00000002245, 1.69945964547, 488.8496164711],
    [0.00000002283, 1.55589787463, 601.7642506762],
    [0.00000002384, 4.4458349331, 21.3406410024],
    [0.00000002096, 5.77425542767, 88.865680217],
    [0.00000002363, 3.35786310868, 124.433415221],
    [0.00000002162, 6.24029269257, 1795.258443721],
    [0.00000002452, 3.19804814047, 208.633228992],
    [0.00000002033, 4.87029603776, 327.4375699205],
    [0.0000000195, 5.56004000293, 18.1592472647],
    [0.00000002283, 4.22375355881, 22.0914005278],
    [0.00000002217, 4.6143309463, 302.164775655],
    [0.00000001888, 5.45600788064, 142.4496501338],
    [0.00000002075, 3.55622165076, 1169.5882514086],
    [0.00000002069, 2.75786819366, 491.8185618877],
    [0.0000000181, 5.96568495526, 213.1872208534],
    [0.00000001813, 1.39785500313, 211.8146227297],
    [0.00000001843, 1.15001484281, 203.0041546995],
    [0.00000001854, 1.41350087782, 1581.959348283],
    [0.00000001697, 3.23613719814, 427.5613987225],
    [0.00000001736, 5.45933992115, 916.9322800554],
    [0.00000001714, 6.14729146384, 643.8294395771],
    [0.00000001948, 5.70817363392, 425.6349830295],
    [0.0000000177, 3.36194411768, 248.7238180901],
    [0.00000001611, 0.97888081762, 2001.4439921582],
    [0.00000001971, 2.59654430358, 429.0458714308],
    [0.00000001628, 0.74011617198, 177.8743727859],
    [0.00000001564, 2.04342011485, 1788.1448967202],
    [0.00000001574, 6.01995224314, 426.6463749858],
    [0.00000001939, 5.4813466938, 636.7158925763],
    [0.00000001651, 4.61629429952, 621.7380390493],
    [0.00000001552, 2.55542734908, 692.5874843535],
    [0.00000001484, 6.17173980637, 56.6223513026],
    [0.00000001782, 3.26122906302, 175.1660598002],
    [0.00000001503, 2.59953333916, 228.276948965],
    [0.00000001559, 0.36281050773, 776.9303104764],
    [0.00000001799, 3.4639597697, 1258.4539316256],
    [0.00000001521, 3.75588462293, 213.5115437591],
    [0.0000000181, 4.37552745264, 213.4109700226],
    [0.00000001521, 0.30214462385, 213.0866471169],
    [0.00000001608, 4.66724132818, 269.9214467406],
    [0.00000001525, 1.47939329423, 198.321241911],
    [0.00000001408, 1.3849184675, 501.3797894433],
    [0.00000001327, 0.23760037979, 148.0787244263],
    [0.00000001305, 2.41201772023, 275.5505210331],
    [0.00000001578, 2.82443242444, 426.5500067662],
    [0.00000001203, 1.36928065935, 235.3904959658],
    [0.00000001296, 5.75203277385, 1692.1656695024],
    [0.00000001295, 3.04090959062, 831.8557407496],
    [0.00000001283, 1.62400181159, 643.0786800517],
    [0.00000001617, 1.31181209458, 214.7835681463],
    [0.00000001346, 4.01262069353, 278.5194664497],
    [0.00000001166, 0.09590019561, 340.7708920448],
    [0.00000001115, 2.20460481017, 221.3758502853],
    [0.00000001176, 1.07528227869, 312.1990839626],
    [0.00000001107, 1.50329021421, 289.5651667136],
    [0.00000001143, 4.40125874383, 213.5597278689],
    [0.00000001253, 0.21632769953, 404.5067903482],
    [0.00000001074, 3.17412275025, 98.8999885246],
    [0.00000001103, 0.23626839162, 617.8058857862],
    [0.00000001077, 3.51670933532, 312.4597163935],
    [0.00000001039, 0.53953974796, 778.4147831847],
    [0.00000001195, 2.11232088496, 205.2223405907],
    [0.00000001093, 5.16243153571, 630.3360587584],
    [0.00000001143, 5.93977485365, 213.0384630071],
    [0.0000000104, 4.79631324365, 106.2741679563],
    [0.000000011, 0.02509241739, 219.4494345923],
    [0.00000001311, 5.93900415785, 436.1594184316],
    [0.0000000126, 0.72481995446, 355.7487455718],
    [0.0000000095, 2.00801292252, 1045.1548361876],
    [0.00000001186, 1.84906064486, 151.0476698429],
    [0.00000000974, 3.01092368346, 696.5196376166],
    [0.00000000924, 4.88158186437, 39.3568759152],
    [0.00000000961, 2.80113869315, 738.7972748386],
    [0.00000001011, 6.27004359435, 121.2520214833],
    [0.00000000904, 4.15218356485, 426.0769260142],
    [0.00000000904, 4.24232505252, 10.2949407385],
    [0.00000000895, 2.47587956888, 447.9388318784],
    [0.00000001186, 0.85270715988, 525.4981794006],
    [0.00000000824, 3.97540449663, 210.5907824523],
    [0.00000000831, 4.05299295705, 207.1487562837],
    [0.00000000937, 5.44353432307, 344.7030453079],
    [0.00000000823, 2.08766677969, 358.9301393095],
    [0.00000000971, 5.09512804595, 1589.0728952838],
    [0.00000001037, 1.04152859909, 2.4476805548],
    [0.00000000816, 0.62175655307, 188.9200730498],
    [0.00000000798, 3.36396062989, 237.6781178262],
    [0.00000000755, 5.90983584858, 284.1485407422],
    [0.0000000087, 1.62765846893, 114.1384744825],
    [0.00000000734, 6.23523714922, 2111.6503133776],
    [0.00000000767, 2.73651219269, 627.3671133418],
    [0.00000000701, 0.72526525525, 10213.285546211],
    [0.00000000801, 5.84130533519, 905.8865797915],
    [0.0000000071, 1.78740818763, 2104.5367663768],
    [0.0000000067, 0.7583937489, 2317.8358618148],
    [0.0000000072, 4.95645178898, 638.4128136057],
    [0.00000000796, 4.87623914638, 342.2553647531],
    [0.00000000703, 0.35096991676, 220.4608265486],
    [0.00000000835, 3.1949282564, 1574.8458012822],
    [0.00000000824, 0.08813665925, 216.0074084237],
    [0.00000000653, 4.1959963539, 247.2393453818],
    [0.00000000826, 4.66845240923, 427.1194557378],
    [0.0000000069, 0.41873449575, 5856.4776591154],
    [0.0000000069, 1.34023204821, 6283.0758499914],
    [0.0000000069, 0.58291546593, 213.4591541324],
    [0.00000000639, 1.20304559619, 867.4234757536],
    [0.0000000083, 1.57233214789, 1898.3512179396],
    [0.00000000753, 1.5118797088, 576.1613880106],
    [0.00000000629, 2.83598833891, 420.9691165835],
    [0.0000000069, 3.48062808501, 213.1390367436],
    [0.000000006, 5.22938546212, 212.0270710508],
    [0.00000000565, 5.28099337758, 423.6774295692],
    [0.00000000552, 5.83265103738, 84.3428261229],
    [0.00000000546, 3.56588711151, 1485.9801210652],
    [0.00000000642, 6.15007145598, 179.3588454942],
    [0.00000000697, 1.91977327925, 134.5853436076],
    [0.00000000648, 5.15917450752, 8.0767548473],
    [0.00000000551, 3.33109164145, 980.6681783588],
    [0.00000000511, 3.87073988213, 125.9873238985],
    [0.00000000506, 0.80261216855, 181.0557665236],
    [0.00000000564, 4.05871107615, 831.1049812242],
    [0.00000000681, 3.45804290093, 220.364458329],
    [0.00000000541, 2.39252901431, 421.93232443],
    [0.00000000498, 3.11515053568, 439.1283638482],
    [0.00000000517, 2.754300048, 1148.2476104062],
    [0.00000000491, 4.47199498503, 558.0021407459],
    [0.00000000467, 4.18144797677, 444.7574381407],
    [0.00000000458, 0.60848440253, 206.233732547],
    [0.00000000542, 3.28613020157, 245.5424243524],
    [0.00000000477, 5.48556902348, 35.4247226521],
    [0.00000000474, 2.42545073874, 436.8931316145],
    [0.00000000481, 3.72498040536, 206.1373643274],
    [0.00000000435, 1.61732308614, 191.9584544356],
    [0.00000000488, 0.2605996965, 416.3032501375],
    [0.00000000493, 4.13699180247, 518.6452648307],
    [0.00000000595, 5.11706007934, 214.5711198252],
    [0.00000000486, 5.17710069856, 67.6680515665],
    [0.00000000463, 5.53192185211, 418.5214360287],
    [0.00000000421, 5.57377685121, 430.79097657],
    [0.00000000446, 6.20735049659, 73.297125859],
    [0.00000000421, 4.65837340438, 543.0242872189],
    [0.00000000435, 2.9525655435, 5.4166259714],
    [0.00000000416, 4.36391909218, 113.3877149571],
    [0.00000000495, 5.38121485133, 391.1734682239],
    [0.0000000052, 3.99939347071, 618.5566453116],
    [0.00000000429, 3.26903461513, 144.1465711632],
    [0.00000000435, 1.60816661416, 2214.7430875962],
    [0.00000000398, 2.38329818919, 299.1263942692],
    [0.00000000399, 0.06301179341, 206.706813299],
    [0.00000000394, 2.75496219113, 425.8474313506],
    [0.00000000508, 2.86873328929, 337.732510659],
    [0.00000000475, 5.68530292289, 320.3240229197],
    [0.00000000432, 0.68132398291, 116.4260963429],
    [0.00000000404, 1.84249441289, 9786.687355335],
    [0.00000000371, 5.83382962844, 2008.557539159],
    [0.00000000382, 4.24995364794, 387.2413149608],
    [0.00000000416, 3.81986946256, 429.5189521828],
    [0.00000000491, 4.18623117082, 219.891377577],
    [0.00000000352, 1.65610545221, 963.4027029714],
    [0.00000000353, 5.5020900346, 305.3461693927],
    [0.00000000431, 4.39380503963, 353.301065017],
    [0.00000000375, 2.67828133567, 319.5732633943],
    [0.00000000359, 3.54801032661, 421.1815649046],
    [0.00000000339, 5.19074405462, 69.1525242748],
    [0.00000000358, 1.11857595997, 1044.4040766622],
    [0.00000000334, 1.8426099474, 1361.5467058442],
    [0.00000000328, 6.07106596408, 710.7467316182],
    [0.00000000328, 1.48618893585, 2420.9286360334],
    [0.00000000359, 5.62797136991, 78.7137518304],
    [0.00000000405, 2.91366762549, 1891.2376709388],
    [0.00000000398, 2.08900381937, 4.665866446],
    [0.00000000326, 1.62373774313, 5.6290742925],
    [0.00000000405, 1.87470341223, 114.3991069134],
    [0.00000000393, 0.56487847337, 128.9562693151],
    [0.00000000312, 5.29291124448, 347.8844390456],
    [0.0000000031, 0.31232452686, 427.3489504014],
    [0.00000000308, 2.84912656825, 487.3651437628],
    [0.00000000291, 3.2597776278, 494.2662424425],
    [0.00000000303, 4.9396287369, 373.9079928365],
    [0.00000000289, 2.83591185309, 212.0752551606],
    [0.00000000289, 2.0537143135, 214.5229357154],
    [0.00000000398, 6.03822674845, 432.2272651685],
    [0.00000000288, 6.16001418475, 969.6224780949],
    [0.00000000296, 0.3033252409, 1055.4497769261],
    [0.0000000028, 1.29728455136, 241.6102710893],
    [0.0000000028, 5.41630221077, 1493.093668066],
    [0.00000000315, 6.24003908326, 465.9550667912],
    [0.00000000274, 5.03981944861, 458.8415197904],
    [0.00000000296, 3.04457317761, 211.6021744086],
    [0.00000000274, 2.72607352851, 145.6310438715],
    [0.00000000293, 1.32452002382, 159.1244246902],
    [0.00000000263, 6.11559198968, 2428.0421830342],
    [0.00000000323, 1.17502395659, 815.0633461142],
    [0.00000000345, 5.37083374878, 428.0826635843],
    [0.00000000258, 0.43205106363, 2634.2277314714],
    [0.00000000275, 0.91628212149, 849.2642284889],
    [0.0000000034, 1.29378813067, 329.7251917809],
    [0.00000000294, 4.29399534634, 4.192785694],
    [0.00000000339, 1.03883773894, 32.2433289144],
    [0.00000000244, 3.52504227332, 184.9879197867],
    [0.00000000243, 3.13047989401, 525.7588118315],
    [0.0000000026, 5.99216785208, 20.6069278195],
    [0.00000000303, 3.96772261614, 934.9485149682],
    [0.00000000285, 5.69474711283, 220.9339073006],
    [0.00000000239, 2.09516779457, 292.0128472684],
    [0.00000000242, 0.98744748894, 282.4516197128],
    [0.00000000278, 2.81667003542, 87.3117715395],
    [0.00000000285, 4.76303256917, 54.1746707478],
    [0.00000000236, 5.79560286324, 280.9671470045],
    [0.00000000246, 1.83689902078, 214.9960164674],
    [0.00000000221, 0.48302467341, 153.4953503977],
    [0.00000000238, 3.52738705554, 267.4737661858],
    [0.00000000293, 5.91401607974, 14.977853527],
    [0.00000000235, 0.29884419224, 14.0146456805],
    [0.00000000229, 3.91975580405, 182.279606801],
    [0.00000000217, 3.9632856194, 894.8408795276],
    [0.00000000218, 1.46057992688, 2531.1349572528],
    [0.0000000021, 2.01138855049, 211.8628068395],
    [0.0000000021, 2.8782376161, 214.7353840365],
    [0.00000000223, 2.49651288358, 1464.6394800628],
    [0.00000000217, 4.03234048538, 835.0371344873],
    [0.00000000209, 2.97542058241, 273.1028404783],
    [0.0000000021, 2.56849303008, 593.426863398],
    [0.00000000218, 1.7185910151, 0.9632078465],
    [0.00000000232, 1.86083014117, 221.1634019642],
    [0.00000000199, 3.53454927143, 219.6618829134],
    [0.00000000197, 2.65338829617, 864.2420820159],
    [0.00000000219, 3.46267185338, 1182.9215735329],
    [0.00000000199, 2.56046317223, 264.5048207692],
    [0.00000000199, 2.035087089, 757.2171545342],
    [0.00000000237, 5.05443109284, 254.9435932136],
    [0.00000000191, 2.07106909876, 756.3233826569],
    [0.00000000192, 1.67985944172, 1677.9385755008],
    [0.00000000191, 1.05067348453, 702.1487119091],
    [0.00000000181, 1.89151852263, 6.1503391543],
    [0.00000000205, 1.98151360584, 199.2844497575],
    [0.00000000181, 1.25381796494, 2737.32050569],
    [0.00000000186, 2.81416016738, 569.0478410098],
    [0.00000000215, 4.52373060846, 3060.8259223474],
    [0.00000000222, 2.90133577623, 205.4347889118],
    [0.00000000246, 3.55891849574, 1251.3403846248],
    [0.00000000191, 4.20221553993, 556.5176680376],
    [0.00000000217, 2.6450996717, 2207.6295405954],
    [0.00000000225, 0.14271906959, 131.4039498699],
    [0.00000000189, 1.27260556263, 192.6921676185],
    [0.00000000179, 6.15189171649, 2.9207613068],
    [0.00000000178, 2.01622328964, 705.1176573257],
    [0.00000000181, 3.62483757675, 233.9060232575],
    [0.00000000188, 2.9283680984, 227.3137411185],
    [0.00000000164, 3.50682537694, 1382.8873468466],
    [0.00000000166, 5.85452227121, 637.4496057592],
    [0.0000000016, 0.13309484488, 431.264057322],
    [0.00000000158, 5.92242110049, 96.8729990951],
    [0.00000000178, 4.55557913565, 46.470422916],
    [0.00000000157, 1.35908014451, 51.2057253312],
    [0.00000000155, 6.24092514222, 464.7312265138],
    [0.00000000155, 6.02684189458, 1286.9081196288],
    [0.00000000155, 1.36669731999, 206.9363079626],
    [0.00000000175, 4.95121713507, 1905.4647649404],
    [0.00000000153, 6.06094547271, 561.1835344836],
    [0.00000000208, 4.50537355579, 24.3790223882],
    [0.00000000185, 5.49802440713, 205.6642835754],
    [0.0000000016, 4.18196878816, 3340.6124266998],
    [0.0000000016, 2.85370771355, 209.1544938538],
    [0.00000000161, 4.98020340619, 2648.454825473],
    [0.00000000152, 0.85558875667, 570.7447620392],
    [0.00000000156, 2.03601440129, 217.4436970222],
    [0.00000000192, 3.98017256784, 212.4053235607],
    [0.00000000192, 0.90945359875, 214.1928673153],
    [0.00000000198, 3.54289000289, 533.6231183577],
    [0.0000000016, 2.51522796187, 3127.3133312618],
    [0.00000000145, 0.93414637377, 1994.3304451574],
    [0.00000000141, 5.66801998888, 120.358249606],
    [0.00000000141, 3.88995778619, 454.9093665273],
    [0.00000000152, 1.01453902153, 2840.4132799086],
    [0.00000000172, 4.15145223592, 2.9689454166],
    [0.00000000146, 5.26789260159, 7.065362891],
    [0.00000000177, 0.43196690516, 140.001969579],
    [0.00000000144, 3.95680110579, 300.6108669775],
    [0.00000000152, 4.29475572258, 555.5544601911],
    [0.00000000143, 4.15264164139, 31.019488637],
    [0.00000000138, 4.20096561019, 731.9443602687],
    [0.00000000139, 0.79924371385, 166.828672522],
    [0.00000000135, 1.27192121638, 92.940845832],
    [0.00000000165, 1.94881873062, 107.0249274817],
    [0.00000000153, 3.07590434707, 3480.3105662226],
    [0.00000000125, 3.41796878361, 1802.3719907218],
    [0.00000000128, 5.83700968658, 2324.9494088156],
    [0.00000000129, 2.75851443754, 480.7728616238],
    [0.00000000122, 4.75728514255, 2854.6403739102],
    [0.00000000129, 4.67730374872, 913.9633346388],
    [0.00000000121, 1.19957548726, 572.2292347475],
    [0.00000000146, 3.7123287785, 546.956440482],
    [0.0000000012, 4.59083886034, 339.2864193365],
    [0.00000000127, 6.19372294369, 59.8037450403],
    [0.00000000123, 5.9848439397, 477.8039162072],
    [0.00000000122, 5.82973501131, 990.2294059144],
    [0.00000000151, 2.39413061881, 2524.021410252],
    [0.00000000147, 4.9819929177, 850.0149880143],
    [0.00000000127, 0.47350572907, 6.592282139],
    [0.00000000116, 4.71488890981, 1130.2313754934],
    [0.00000000129, 5.42665311725, 2538.2485042536],
    [0.00000000111, 4.51520219898, 1699.2792165032],
    [0.00000000114, 2.06120434865, 952.0963702766],
    [0.00000000112, 4.14736642579, 422.405405182],
    [0.00000000111, 5.53230411085, 857.1285350151],
    [0.00000000109, 3.00005651288, 420.4478517217],
    [0.00000000112, 2.20667724213, 395.578702239],
    [0.00000000147, 1.52324472511, 552.5855147745],
    [0.00000000118, 5.47495367121, 2957.7331481288],
    [0.00000000113, 2.57036693965, 462.0229135281],
    [0.00000000122, 4.96246567897, 638.9340784675],
    [0.00000000104, 1.91139383428, 472.1748419147],
    [0.00000000116, 2.82742160564, 450.9772132642],
    [0.00000000115, 2.26043201622, 1781.0313497194],
    [0.0000000011, 4.86686492403, 2914.0142358238],
    [0.00000000109, 4.4384872728, 405.9912630565],
    [0.00000000102, 5.90112611078, 99.9113804809],
    [0.00000000101, 2.5339241033, 640.8604941605],
    [0.00000000112, 5.53802838779, 381.3516082374],
    [0.00000000099, 5.92199927896, 411.620337349],
    [0.000000001, 5.21941099517, 426.4863162914],
    [0.00000000137, 2.20269111622, 7.1617311106],
    [0.00000000097, 1.27914551364, 2847.5268269094],
    [0.00000000115, 5.22953781515, 1119.1856752295],
    [0.00000000095, 4.26135357007, 540.7366653585],
    [0.00000000098, 5.27107833435, 639.9454704238],
    [0.00000000107, 4.38879925113, 412.5835451955],
    [0.00000000093, 5.35954173624, 334.5511169213],
    [0.00000000094, 1.16749092536, 5643.1785636774],
    [0.00000000106, 4.19443004843, 486.4019359163],
    [0.00000000096, 0.59816870672, 714.6788848813],
    [0.00000000094, 0.54205024076, 423.6292454594],
    [0.00000000109, 2.82817225044, 468.2426886516],
    [0.00000000083, 6.12100285205, 380.12776796],
    [0.00000000084, 2.20217125255, 909.8187330546],
    [0.00000000085, 5.20920130934, 562.1467423301],
    [0.00000000105, 2.66415710279, 460.5384408198],
    [0.00000000084, 0.14646013561, 681.5417840896],
    [0.0000000008, 3.03551986945, 409.9234163196],
    [0.00000000097, 5.09373549436, 92.0470739547],
    [0.0000000011, 2.03622569317, 642.3449668688],
    [0.0000000008, 5.71035549752, 361.3778198643],
    [0.00000000084, 3.00961145133, 426.8106391971],
    [0.00000000085, 4.28770375688, 135.5485514541],
    [0.00000000093, 5.32943472274, 432.0148168474],
    [0.00000000086, 1.51247258028, 760.25553592],
    [0.00000000084, 5.83905303748, 426.3857425549],
    [0.000000001, 3.62925349363, 426.7100654606],
    [0.00000000094, 4.30151510535, 3377.217792004],
    [0.00000000098, 2.07334671974, 639.8491022042],
    [0.0000000008, 4.11576173565, 774.4826299216],
    [0.00000000075, 2.8912265661, 806.725958836],
    [0.0000000008, 0.88468467902, 856.3777754897],
    [0.00000000072, 4.85259171933, 392.6579409322],
    [0.00000000083, 0.11133738383, 402.2191684878],
];

const B1: &[Term] = &[
    [0.00397554998, 5.33289992556, 213.299095438],
    [0.00049478641, PI, 0.0],
    [0.00018571607, 6.09919206378, 426.598190876],
    [0.00014800587, 2.3058606052, 206.1855484372],
    [0.00009643981, 1.6967466012, 220.4126424388],
    [0.00003757161, 1.25429514018, 419.4846438752],
    [0.00002716647, 5.91166664787, 639.897286314],
    [0.00001455309, 0.85161616532, 433.7117378768],
    [0.00001290595, 2.9177085709, 7.1135470008],
    [0.0000085263, 0.43572078997, 316.3918696566],
    [0.00000284386, 1.61881754773, 227.5261894396],
    [0.00000292185, 5.3157425127, 853.196381752],
    [0.0000027509, 3.88864137336, 103.0927742186],
    [0.00000297726, 0.91909206723, 632.7837393132],
    [0.00000172359, 0.05215146556, 647.0108333148],
    [0.00000127731, 1.20711452525, 529.6909650946],
    [0.00000166237, 2.44351613165, 199.0720014364],
    [0.0000015822, 5.20850125766, 110.2063212194],
    [0.00000109839, 2.45695551627, 217.2312487011],
    [0.00000081759, 2.75839171353, 210.1177017003],
    [0.0000008101, 2.86038377187, 14.2270940016],
    [0.00000068658, 1.65537623146, 202.2533951741],
    [0.00000059281, 1.82410768234, 323.5054166574],
    [0.00000065161, 1.25527521313, 216.4804891757],
    [0.00000061024, 1.25273412095, 209.3669421749],
    [0.00000046386, 0.81534705304, 440.8252848776],
    [0.00000036163, 1.81851057689, 224.3447957019],
    [0.00000034041, 2.83971297997, 117.3198682202],
    [0.00000032164, 1.18676132343, 846.0828347512],
    [0.00000033114, 1.3055708001, 412.3710968744],
    [0.00000027282, 4.64744847591, 1066.49547719],
    [0.00000022805, 4.12923703368, 415.5524906121],
    [0.00000027128, 4.44228739187, 11.0457002639],
    [0.000000181, 5.56392353608, 860.3099287528],
    [0.00000020851, 1.4099927374, 309.2783226558],
    [0.00000014947, 1.34302610607, 95.9792272178],
    [0.00000015316, 1.22393617996, 63.7358983034],
    [0.00000014601, 1.0075370497, 536.8045120954],
    [0.00000012842, 2.27059911053, 742.9900605326],
    [0.00000012832, 4.88898877901, 522.5774180938],
    [0.00000013137, 2.45991904379, 490.3340891794],
    [0.00000011883, 1.87308666696, 423.4167971383],
    [0.00000013027, 3.21731634178, 277.0349937414],
    [0.00000009946, 3.11650057543, 625.6701923124],
    [0.0000001271, 0.29501589197, 422.6660376129],
    [0.00000009644, 1.74586356703, 330.6189636582],
    [0.00000008079, 2.41931187953, 430.5303441391],
    [0.00000008245, 4.68121931659, 215.7467759928],
    [0.00000008958, 0.46482448501, 429.7795846137],
    [0.00000006547, 3.01351967549, 949.1756089698],
    [0.00000007251, 5.97098186912, 149.5631971346],
    [0.00000006056, 1.491150111, 234.6397364404],
    [0.00000005791, 5.36720639912, 735.8765135318],
    [0.00000005994, 0.02442871989, 654.1243803156],
    [0.00000006647, 3.90879134581, 351.8165923087],
    [0.00000006824, 1.52456408861, 437.6438911399],
    [0.00000005134, 3.81149834833, 74.7815985673],
    [0.00000003959, 5.63505813057, 210.8514148832],
    [0.00000003811, 2.63992803111, 3.1813937377],
    [0.00000003643, 1.73267151007, 1059.3819301892],
    [0.00000003554, 4.98621474362, 3.9321532631],
    [0.00000004568, 4.33599514584, 628.8515860501],
    [0.00000003145, 2.51404811765, 1162.4747044078],
    [0.00000003522, 1.16093567319, 223.5940361765],
    [0.00000002933, 2.06057834252, 956.2891559706],
    [0.00000002644, 5.62559379305, 203.7378678824],
    [0.00000002992, 5.06312015437, 515.463871093],
    [0.00000002304, 2.73123930535, 21.3406410024],
    [0.00000002168, 2.91805928238, 203.0041546995],
    [0.00000002398, 3.99421633537, 1279.794572628],
    [0.00000002146, 0.87500689888, 408.4389436113],
    [0.00000002074, 1.65731069687, 137.0330241624],
    [0.00000001797, 1.56879308343, 124.433415221],
    [0.00000002088, 1.85721384366, 138.5174968707],
    [0.00000001769, 4.82294294946, 1073.6090241908],
    [0.00000001635, 1.20387813348, 88.865680217],
    [0.00000002202, 5.93027042684, 1052.2683831884],
    [0.00000001843, 0.22126910774, 750.1036075334],
    [0.00000001851, 2.4547040929, 340.7708920448],
    [0.0000000189, 0.41025631859, 127.4717966068],
    [0.00000001582, 5.63360832372, 214.2623032845],
    [0.0000000192, 3.77935901504, 350.3321196004],
    [0.00000001786, 5.78644477326, 635.9651330509],
    [0.00000001497, 3.1302689321, 703.6331846174],
    [0.00000001583, 3.46882532865, 38.1330356378],
    [0.00000001577, 4.02973226017, 388.4651552382],
    [0.00000001645, 5.59115773632, 483.2205421786],
    [0.00000001405, 4.07880624509, 728.762966531],
    [0.00000001498, 5.87094430469, 362.8622925726],
    [0.00000001317, 2.22386203585, 213.3472795478],
    [0.00000001321, 2.91534782718, 1265.5674786264],
    [0.00000001307, 5.41748323885, 217.964961884],
    [0.00000001483, 0.91111666841, 543.9180590962],
    [0.00000001291, 2.6233380107, 554.0699874828],
    [0.00000001406, 0.34582712649, 85.8272988312],
    [0.00000001287, 2.82247279651, 231.4583427027],
    [0.00000001563, 4.88438049382, 208.633228992],
    [0.00000001316, 5.30963570131, 213.2509113282],
    [0.00000001164, 1.39531381032, 210.3783341312],
    [0.00000001295, 2.46089213219, 200.7689224658],
    [0.00000001236, 3.03659580871, 838.9692877504],
    [0.00000001449, 4.00934078371, 195.1398481733],
    [0.00000001251, 1.46674521697, 218.7157214094],
    [0.00000001568, 1.89939852487, 212.3358875915],
    [0.00000001067, 5.34734443894, 207.6700211455],
    [0.00000001111, 0.70962013461, 447.9388318784],
    [0.00000001012, 1.3721722064, 636.7158925763],
    [0.00000001163, 6.00108996618, 191.2076949102],
    [0.00000000887, 2.84483069917, 191.9584544356],
    [0.00000001005, 2.72373040634, 1478.8665740644],
    [0.00000000879, 1.19585734916, 417.0369633204],
    [0.00000000829, 4.94182950387, 497.4476361802],
    [0.00000000878, 6.24981924813, 265.9892934775],
    [0.00000000781, 4.61973017912, 424.1505103212],
    [0.00000000924, 3.64210508536, 222.8603229936],
    [0.00000000971, 2.89404568581, 563.6312150384],
    [0.00000000946, 5.72987725592, 1368.660252845],
    [0.00000000834, 6.12384852532, 209.106309744],
    [0.00000000911, 1.06795057723, 650.9429865779],
    [0.00000000731, 0.81660632103, 142.4496501338],
    [0.00000000795, 5.54574074566, 76.2660712756],
    [0.00000001012, 5.97140626297, 643.0786800517],
    [0.00000000703, 2.41479303782, 10.2949407385],
    [0.00000000726, 4.52598413209, 565.1156877467],
    [0.00000000691, 2.31682364985, 160.6088973985],
    [0.00000000695, 0.37889317398, 212.7778305762],
    [0.00000000676, 4.436062709, 842.1506814881],
    [0.00000000769, 4.47368582271, 52.6901980395],
    [0.00000000658, 0.32331118921, 621.7380390493],
    [0.00000000838, 4.68035046143, 288.0806940053],
    [0.00000000674, 5.63961963995, 867.4234757536],
    [0.00000000695, 1.32062509205, 1169.5882514086],
    [0.00000000841, 2.46995220838, 1375.7737998458],
    [0.00000000633, 3.46145143241, 18.1592472647],
    [0.00000000722, 0.04119071457, 269.9214467406],
    [0.00000000757, 2.15030650611, 207.8824694666],
    [0.00000000692, 0.87072324976, 213.8203602998],
    [0.00000000602, 0.85288769518, 225.8292684102],
    [0.00000000635, 4.76109030475, 831.8557407496],
    [0.00000000701, 1.20410854661, 479.2883889155],
    [0.00000000624, 2.30585779534, 643.8294395771],
    [0.00000000582, 0.18811617696, 1.4844727083],
    [0.00000000513, 2.5652596784, 404.5067903482],
    [0.00000000502, 4.97423814367, 212.5483359126],
    [0.00000000644, 2.10955154583, 1272.6810256272],
    [0.00000000467, 4.47217820662, 235.3904959658],
    [0.00000000566, 4.44740324446, 429.0458714308],
    [0.00000000448, 0.57491120802, 22.0914005278],
    [0.0000000052, 1.15131866397, 337.732510659],
    [0.00000000476, 4.78513362967, 218.9281697305],
    [0.00000000519, 0.61616177345, 436.8931316145],
    [0.00000000442, 2.10204008144, 416.3032501375],
    [0.00000000536, 1.08779067908, 344.7030453079],
    [0.00000000477, 2.42483193385, 216.2198567448],
    [0.00000000469, 5.22622034028, 942.062061969],
    [0.00000000392, 0.41137926465, 302.164775655],
    [0.000000004, 5.1721647847, 414.0680179038],
    [0.00000000383, 3.58419227076, 1045.1548361876],
    [0.00000000443, 1.11051326413, 425.1137181677],
    [0.00000000517, 3.44547026103, 12.5301729722],
    [0.00000000369, 1.60095273908, 56.6223513026],
    [0.00000000354, 2.79123486392, 1581.959348283],
    [0.00000000405, 5.93402105921, 173.9422195228],
    [0.00000000319, 4.31850876624, 219.4494345923],
    [0.0000000033, 0.62529198264, 358.9301393095],
    [0.00000000305, 0.8240442342, 1485.9801210652],
    [0.00000000391, 2.59385552893, 1795.258443721],
    [0.00000000291, 3.12019266878, 217.491881132],
    [0.00000000294, 2.18552193901, 444.7574381407],
    [0.00000000281, 0.77791302266, 757.2171545342],
    [0.00000000355, 5.44570491928, 1685.0521225016],
    [0.00000000305, 2.65927043884, 355.7487455718],
    [0.00000000269, 6.00323720265, 934.9485149682],
    [0.00000000287, 2.60486363576, 113.3877149571],
    [0.00000000348, 0.98872551635, 70.8494453042],
    [0.00000000331, 5.62133883922, 9.5612275556],
    [0.00000000255, 4.1408660503, 284.1485407422],
    [0.00000000311, 6.27145060602, 207.1487562837],
    [0.00000000267, 4.72606312146, 696.5196376166],
    [0.00000000319, 4.68828119248, 1155.361157407],
    [0.00000000227, 3.10352674343, 1361.5467058442],
    [0.00000000228, 1.19253095837, 1589.0728952838],
    [0.00000000244, 5.3632797601, 245.5424243524],
    [0.00000000218, 2.16069250901, 177.8743727859],
    [0.00000000254, 4.51652534648, 1148.2476104062],
    [0.00000000211, 2.82699627326, 106.2741679563],
    [0.0000000023, 4.63171743406, 107.0249274817],
    [0.00000000201, 4.52152562223, 508.3503240922],
    [0.0000000023, 5.93560798508, 618.5566453116],
    [0.00000000253, 2.08074949572, 252.6559713532],
    [0.00000000234, 2.43423283339, 1692.1656695024],
    [0.00000000196, 1.01284131123, 114.3991069134],
    [0.00000000196, 2.73629728926, 214.0498549634],
    [0.00000000191, 1.51642829677, 6069.7767545534],
    [0.00000000252, 5.10097595426, 1258.4539316256],
    [0.0000000024, 2.93712394928, 916.9322800554],
    [0.00000000224, 4.42406538277, 251.4321310758],
    [0.00000000223, 2.34400676548, 1677.9385755008],
    [0.00000000228, 5.00073557208, 1574.8458012822],
    [0.00000000183, 5.09056895026, 220.4608265486],
    [0.00000000178, 6.05669760153, 206.1373643274],
    [0.00000000185, 3.73859309582, 114.1384744825],
    [0.000000002, 1.89409546254, 2420.9286360334],
    [0.00000000158, 2.78517362162, 2008.557539159],
    [0.00000000191, 2.28724146195, 2435.155730035],
    [0.00000000188, 4.29343910228, 1471.7530270636],
    [0.00000000155, 5.3519412342, 576.1613880106],
    [0.00000000174, 2.80423114755, 1781.0313497194],
    [0.00000000166, 5.32531835813, 2001.4439921582],
    [0.00000000165, 2.62993712087, 525.4981794006],
    [0.00000000141, 4.73916921092, 501.3797894433],
    [0.00000000161, 5.8336852375, 181.0557665236],
    [0.00000000137, 1.45135867137, 131.5469622218],
    [0.00000000157, 3.22870773657, 1493.093668066],
    [0.00000000136, 4.20279658293, 710.7467316182],
    [0.00000000144, 4.61003572124, 121.2520214833],
    [0.00000000131, 5.85409245557, 175.1660598002],
    [0.00000000144, 0.96056164245, 214.7835681463],
    [0.00000000146, 3.95687956474, 421.93232443],
    [0.00000000138, 1.0308057361, 4.665866446],
    [0.00000000167, 1.97508934614, 62.2514255951],
    [0.00000000123, 2.28640485589, 1898.3512179396],
    [0.00000000168, 4.63122081226, 1891.2376709388],
    [0.00000000129, 0.05327999225, 211.8146227297],
    [0.00000000134, 3.49720535944, 488.8496164711],
    [0.00000000117, 3.43819501459, 436.1594184316],
    [0.00000000125, 5.87007326241, 963.4027029714],
    [0.0000000012, 0.70795300239, 81.7521332162],
    [0.00000000125, 4.50999471095, 2317.8358618148],
    [0.00000000116, 6.11600926571, 558.0021407459],
    [0.00000000117, 4.78666549046, 601.7642506762],
    [0.00000000108, 0.45464469172, 1802.3719907218],
    [0.00000000111, 1.44669239244, 2531.1349572528],
    [0.00000000109, 6.14289264597, 151.0476698429],
    [0.00000000113, 4.05600865495, 1286.9081196288],
    [0.00000000129, 5.1393694616, 849.2642284889],
    [0.00000000127, 3.88189432056, 98.8999885246],
    [0.00000000133, 2.3829063407, 2111.6503133776],
    [0.00000000122, 4.40757611742, 778.4147831847],
    [0.00000000095, 0.07909774752, 213.4109700226],
    [0.00000000095, 1.66925524906, 213.1872208534],
    [0.00000000103, 1.88058957173, 99.1606209555],
    [0.00000000119, 3.62785705509, 248.7238180901],
    [0.0000000009, 4.63029999228, 228.276948965],
    [0.00000000092, 5.48700119144, 767.3690829208],
    [0.00000000089, 4.61331934339, 431.264057322],
    [0.00000000099, 3.60670326134, 776.9303104764],
    [0.00000000085, 4.93878023673, 2.4476805548],
    [0.00000000089, 6.24541644164, 661.2379273164],
    [0.00000000085, 0.4589634906, 1382.8873468466],
    [0.00000000088, 3.81144552178, 1788.1448967202],
    [0.00000000103, 3.20558404998, 312.1990839626],
    [0.0000000008, 2.28889729136, 213.0866471169],
    [0.0000000008, 5.74264101239, 213.5115437591],
    [0.00000000082, 3.23546757052, 198.321241911],
    [0.00000000078, 6.0384119105, 835.0371344873],
    [0.0000000008, 0.22601918692, 427.5613987225],
    [0.00000000072, 2.05164614795, 2634.2277314714],
    [0.00000000091, 5.97938003596, 556.5176680376],
    [0.00000000087, 2.71469794199, 617.8058857862],
];

const B2: &[Term] = &[
    [0.00020629977, 0.50482422817, 213.299095438],
    [0.00003719555, 3.99833475829, 206.1855484372],
    [0.00001627158, 6.181899395, 220.4126424388],
    [0.00001346067, 0.0, 0.0],
    [0.00000705842, 3.03914308836, 419.4846438752],
    [0.00000365042, 5.09928680706, 426.598190876],
    [0.00000329632, 5.27899210039, 433.7117378768],
    [0.00000219335, 3.82841533795, 639.897286314],
    [0.00000139393, 1.04272623499, 7.1135470008],
    [0.0000010398, 6.15730992966, 227.5261894396],
    [0.00000092961, 1.97994412845, 316.3918696566],
    [0.00000071242, 4.14754353431, 199.0720014364],
    [0.00000051927, 2.88364833898, 632.7837393132],
    [0.00000048961, 4.43390206741, 647.0108333148],
    [0.00000041373, 3.15927770079, 853.196381752],
    [0.00000028602, 4.52978327558, 210.1177017003],
    [0.00000023969, 1.11595912146, 14.2270940016],
    [0.00000020511, 4.35095844197, 217.2312487011],
    [0.00000019532, 5.30779711223, 440.8252848776],
    [0.00000018263, 0.85391476786, 110.2063212194],
    [0.00000015742, 4.25767226302, 103.0927742186],
    [0.0000001684, 5.68112084135, 216.4804891757],
    [0.00000013613, 2.99904334066, 412.3710968744],
    [0.00000011567, 2.5267992841, 529.6909650946],
    [0.00000007963, 3.3151242392, 202.2533951741],
    [0.00000006599, 0.28766025146, 323.5054166574],
    [0.00000006312, 1.16121321336, 117.3198682202],
    [0.00000005891, 3.58260177246, 309.2783226558],
    [0.00000006648, 5.55714129949, 209.3669421749],
    [0.0000000559, 2.47783944511, 1066.49547719],
    [0.00000006192, 3.61231886519, 860.3099287528],
    [0.00000004231, 3.02212363572, 846.0828347512],
    [0.00000003612, 4.79935735435, 625.6701923124],
    [0.00000003398, 3.76732731354, 423.4167971383],
    [0.00000003387, 6.04222745633, 234.6397364404],
    [0.00000002578, 5.63610668746, 735.8765135318],
    [0.00000002831, 4.81642822334, 429.7795846137],
    [0.00000002817, 4.47516563908, 654.1243803156],
    [0.00000002573, 0.22467245054, 522.5774180938],
    [0.0000000261, 3.29126967191, 95.9792272178],
    [0.00000002419, 0.02986335489, 415.5524906121],
    [0.00000002112, 4.55964179603, 422.6660376129],
    [0.00000002304, 6.25081073546, 330.6189636582],
    [0.00000001758, 5.53430456858, 536.8045120954],
    [0.00000001814, 5.05675881426, 277.0349937414],
    [0.0000000155, 5.60375604692, 223.5940361765],
    [0.00000001457, 4.47767649852, 430.5303441391],
    [0.00000001607, 5.535995501, 224.3447957019],
    [0.00000001172, 4.71017775994, 203.0041546995],
    [0.00000001231, 0.2511593188, 3.9321532631],
    [0.00000001105, 1.01595427676, 21.3406410024],
    [0.00000000868, 4.84623483952, 949.1756089698],
    [0.00000000939, 1.35429452093, 742.9900605326],
    [0.00000000693, 6.03599130692, 124.433415221],
    [0.00000000712, 4.45550701473, 191.9584544356],
    [0.0000000069, 5.44243765037, 437.6438911399],
    [0.0000000081, 0.46198177342, 515.463871093],
    [0.00000000694, 5.23748122403, 447.9388318784],
    [0.00000000604, 2.95749705544, 88.865680217],
    [0.00000000669, 0.08457977809, 215.7467759928],
    [0.00000000579, 0.65329445948, 3.1813937377],
    [0.00000000712, 6.05964117622, 11.0457002639],
    [0.00000000698, 2.91371419321, 1073.6090241908],
    [0.00000000526, 2.24947851818, 1059.3819301892],
    [0.00000000511, 2.86838724347, 408.4389436113],
    [0.00000000589, 5.79268515755, 63.7358983034],
    [0.00000000519, 1.76641574095, 1279.794572628],
    [0.00000000503, 5.73762297081, 728.762966531],
    [0.00000000482, 4.68234512154, 838.9692877504],
    [0.00000000494, 4.04363805503, 490.3340891794],
    [0.00000000458, 1.17998315936, 210.8514148832],
    [0.0000000038, 5.28045750432, 1052.2683831884],
    [0.00000000404, 4.58953258519, 302.164775655],
    [0.00000000377, 5.20131800999, 74.7815985673],
    [0.00000000328, 0.11893501088, 956.2891559706],
    [0.0000000029, 3.99300398632, 1162.4747044078],
    [0.00000000262, 2.04320741578, 1471.7530270636],
    [0.00000000259, 3.76206113036, 635.9651330509],
    [0.00000000254, 0.16694559092, 195.1398481733],
    [0.00000000309, 5.4492117596, 543.9180590962],
    [0.00000000237, 1.27761853769, 231.4583427027],
    [0.00000000288, 1.32449995239, 203.7378678824],
    [0.00000000229, 4.19748765966, 1265.5674786264],
    [0.00000000238, 4.02925601887, 643.0786800517],
    [0.00000000238, 0.49997895983, 10.2949407385],
    [0.00000000257, 3.69107889837, 867.4234757536],
    [0.00000000191, 0.17807919948, 628.8515860501],
    [0.00000000246, 5.62469599682, 351.8165923087],
    [0.00000000183, 3.38184740572, 636.7158925763],
    [0.00000000172, 3.8317349403, 1581.959348283],
    [0.0000000022, 1.03443668151, 483.2205421786],
    [0.00000000217, 4.65210162713, 750.1036075334],
    [0.00000000143, 2.31969979791, 18.1592472647],
    [0.00000000137, 5.50046852846, 1169.5882514086],
    [0.0000000012, 3.70151294359, 416.3032501375],
    [0.00000000136, 3.38453909352, 1155.361157407],
    [0.00000000149, 0.85459831932, 1375.7737998458],
    [0.0000000015, 5.71949902293, 618.5566453116],
    [0.00000000125, 4.82446274394, 436.8931316145],
    [0.0000000012, 3.26968058035, 1478.8665740644],
    [0.00000000131, 0.11496484259, 1898.3512179396],
    [0.00000000099, 4.57241894541, 643.8294395771],
    [0.00000000095, 4.92115458463, 650.9429865779],
    [0.0000000009, 2.09300085806, 621.7380390493],
    [0.00000000111, 0.11975665259, 831.8557407496],
    [0.00000000089, 2.54351587616, 85.8272988312],
    [0.0000000008, 5.09103451442, 340.7708920448],
    [0.00000000078, 3.17395501851, 497.4476361802],
    [0.00000000085, 0.18997660997, 1258.4539316256],
    [0.00000000081, 1.16732337173, 217.964961884],
    [0.00000000072, 5.47328223678, 337.732510659],
];

const B3: &[Term] = &[
    [0.00000666252, 1.99006340181, 213.299095438],
    [0.0000063235, 5.69778316807, 206.1855484372],
    [0.00000398051, 0.0, 0.0],
    [0.00000187838, 4.33779804809, 220.4126424388],
    [0.00000091884, 4.84104208217, 419.4846438752],
    [0.00000042369, 2.38073239056, 426.598190876],
    [0.00000051548, 3.42149490328, 433.7117378768],
    [0.00000025661, 4.40167213109, 227.5261894396],
    [0.00000020551, 5.85313509872, 199.0720014364],
    [0.00000018081, 1.99321433229, 639.897286314],
    [0.00000010874, 5.37344546547, 7.1135470008],
    [0.0000000959, 2.54901825866, 647.0108333148],
    [0.00000007085, 3.45518372721, 316.3918696566],
    [0.00000006002, 4.80055225135, 632.7837393132],
    [0.00000005778, 0.01680378777, 210.1177017003],
    [0.00000004881, 5.63719730884, 14.2270940016],
    [0.00000004501, 1.2242441901, 853.196381752],
    [0.00000005542, 3.51756747774, 440.8252848776],
    [0.00000003548, 4.7129937089, 412.3710968744],
    [0.00000002851, 0.62679207578, 103.0927742186],
    [0.00000002173, 3.71982274459, 216.4804891757],
    [0.00000001991, 6.10867071657, 217.2312487011],
    [0.00000001435, 1.69177141453, 860.3099287528],
    [0.00000001217, 4.30778838827, 234.6397364404],
    [0.00000001157, 5.75027789902, 309.2783226558],
    [0.00000000795, 5.69026441157, 117.3198682202],
    [0.00000000733, 0.59842720676, 1066.49547719],
    [0.00000000713, 0.21700311697, 625.6701923124],
    [0.00000000773, 5.4836198199, 202.2533951741],
    [0.00000000897, 2.65577866867, 654.1243803156],
    [0.00000000509, 2.86079833766, 429.7795846137],
    [0.00000000462, 4.17742567173, 529.6909650946],
    [0.0000000039, 6.11288036049, 191.9584544356],
    [0.00000000505, 4.51905764563, 323.5054166574],
    [0.00000000379, 3.74436004151, 223.5940361765],
    [0.00000000332, 5.4937089057, 21.3406410024],
    [0.00000000377, 5.25624813434, 95.9792272178],
    [0.00000000384, 4.48187414769, 330.6189636582],
    [0.00000000367, 5.0319092968, 846.0828347512],
    [0.00000000281, 1.14133888637, 735.8765135318],
    [0.00000000245, 5.8161825325, 423.4167971383],
    [0.00000000241, 1.7033512018, 522.5774180938],
    [0.00000000258, 3.69110118716, 447.9388318784],
    [0.00000000231, 4.15697626494, 110.2063212194],
    [0.00000000305, 5.97746884029, 302.164775655],
    [0.00000000284, 0.66224572127, 203.0041546995],
    [0.00000000204, 1.54683820621, 209.3669421749],
    [0.00000000194, 4.21193801453, 124.433415221],
    [0.00000000145, 4.79689259614, 88.865680217],
    [0.00000000151, 3.82010884134, 536.8045120954],
    [0.000000001, 0.03596545368, 949.1756089698],
    [0.00000000097, 0.91303450276, 1073.6090241908],
    [0.0000000011, 2.21197473966, 515.463871093],
    [0.00000000084, 2.53842533109, 422.6660376129],
    [0.00000000085, 5.11102520704, 3.9321532631],
    [0.00000000077, 6.04074586787, 838.9692877504],
    [0.00000000085, 1.18898817378, 728.762966531],
    [0.00000000084, 4.10158366806, 224.3447957019],
];

const B4: &[Term] = &[
    [0.00000080384, 1.11918414679, 206.1855484372],
    [0.0000003166, 3.12218745098, 213.299095438],
    [0.00000017143, 2.48073200414, 220.4126424388],
    [0.00000011844, PI, 0.0],
    [0.00000009005, 0.38441424927, 419.4846438752],
    [0.00000006164, 1.56186379537, 433.7117378768],
    [0.0000000466, 1.2823563957, 199.0720014364],
    [0.00000004775, 2.63498295487, 227.5261894396],
    [0.00000001487, 1.43096671616, 426.598190876],
    [0.00000001424, 0.66988083613, 647.0108333148],
    [0.00000001075, 6.18092274059, 639.897286314],
    [0.00000001145, 1.72041928134, 440.8252848776],
    [0.00000000682, 3.8484109818, 14.2270940016],
    [0.00000000655, 3.49486258327, 7.1135470008],
    [0.00000000456, 0.47338193402, 632.7837393132],
    [0.00000000509, 0.31432285584, 412.3710968744],
    [0.00000000343, 5.86413875355, 853.196381752],
    [0.0000000027, 2.50125594913, 234.6397364404],
    [0.00000000197, 5.39156324804, 316.3918696566],
    [0.00000000236, 2.11084590211, 210.1177017003],
    [0.00000000172, 6.09682874401, 860.3099287528],
    [0.00000000159, 5.95049154821, 216.4804891757],
    [0.000000001, 1.98534903594, 625.6701923124],
    [0.00000000112, 0.85526419268, 654.1243803156],
    [0.00000000115, 5.03884718594, 117.3198682202],
    [0.00000000115, 0.44589613974, 110.2063212194],
];

const B5: &[Term] = &[
    [0.00000007895, 2.81927558645, 206.1855484372],
    [0.00000001014, 0.5118721027, 220.4126424388],
    [0.00000000772, 2.99484124049, 199.0720014364],
    [0.00000000967, PI, 0.0],
    [0.00000000583, 5.96456944075, 433.7117378768],
    [0.00000000588, 0.78008666397, 227.5261894396],
    [0.00000000445, 2.38630799074, 419.4846438752],
    [0.00000000098, 5.10622131539, 647.0108333148],
    [0.00000000091, 5.81659714144, 7.1135470008],
    [0.00000000088, 6.17828532308, 440.8252848776],
    [0.00000000089, 0.5839686453, 213.299095438],
];

const R0: &[Term] = &[
    [9.55758135801, 0.0, 0.0],
    [0.52921382465, 2.39226219733, 213.299095438],
    [0.01873679934, 5.23549605091, 206.1855484372],
    [0.01464663959, 1.64763045468, 426.598190876],
    [0.00821891059, 5.93520025371, 316.3918696566],
    [0.00547506899, 5.01532628454, 103.0927742186],
    [0.00371684449, 2.27114833428, 220.4126424388],
    [0.00361778433, 3.13904303264, 7.1135470008],
    [0.00140617548, 5.70406652991, 632.7837393132],
    [0.00108974737, 3.29313595577, 110.2063212194],
    [0.00069007015, 5.94099622447, 419.4846438752],
    [0.0006105335, 0.94037761156, 639.897286314],
    [0.00048913044, 1.55733388472, 202.2533951741],
    [0.00034143794, 0.19518550682, 277.0349937414],
    [0.00032401718, 5.47084606947, 949.1756089698],
    [0.00020936573, 0.46349163993, 735.8765135318],
    [0.00020839118, 1.5210259064, 433.7117378768],
    [0.00020746678, 5.33255667599, 199.0720014364],
    [0.00015298457, 3.05943652881, 529.6909650946],
    [0.00014296479, 2.60433537909, 323.5054166574],
    [0.00011993314, 5.98051421881, 846.0828347512],
    [0.00011380261, 1.73105746566, 522.5774180938],
    [0.00012884128, 1.64892310393, 138.5174968707],
    [0.00007752769, 5.85191318903, 95.9792272178],
    [0.00009796061, 5.20475863996, 1265.5674786264],
    [0.00006465967, 0.17733160145, 1052.2683831884],
    [0.00006770621, 3.00433479284, 14.2270940016],
    [0.00005850443, 1.45519636076, 415.5524906121],
    [0.00005307481, 0.5973753405, 63.7358983034],
    [0.00004695746, 2.14919036956, 227.5261894396],
    [0.00004043988, 1.64010323863, 209.3669421749],
    [0.00003688132, 0.7801613317, 412.3710968744],
    [0.00003376457, 3.69528478828, 224.3447957019],
    [0.00002885348, 1.38764077631, 838.9692877504],
    [0.00002976033, 5.68467931117, 210.1177017003],
    [0.00003419551, 4.94549148887, 1581.959348283],
    [0.00003460943, 1.85088802878, 175.1660598002],
    [0.00003400616, 0.55386747515, 350.3321196004],
    [0.0000250763, 3.53851863255, 742.9900605326],
    [0.00002448325, 6.18412386316, 1368.660252845],
    [0.00002406138, 2.96559220267, 117.3198682202],
    [0.00002881181, 0.17960757891, 853.196381752],
    [0.00002173959, 0.01508587396, 340.7708920448],
    [0.00002024483, 5.05411271271, 11.0457002639],
    [0.00001740254, 2.34657043464, 309.2783226558],
    [0.00001861397, 5.93361638244, 625.6701923124],
    [0.00001888436, 0.02968443389, 3.9321532631],
    [0.00001610859, 1.17302463549, 74.7815985673],
    [0.00001462631, 1.92588134017, 216.4804891757],
    [0.00001474547, 5.6767046113, 203.7378678824],
    [0.00001395109, 5.93669404929, 127.4717966068],
    [0.00001781165, 0.76314388077, 217.2312487011],
    [0.00001817186, 5.77713225779, 490.3340891794],
    [0.00001472392, 1.40064915651, 137.0330241624],
    [0.00001304089, 0.77235613966, 647.0108333148],
    [0.00001149773, 5.74021249703, 1162.4747044078],
    [0.00001126667, 4.46707803791, 265.9892934775],
    [0.00001277489, 2.98412586423, 1059.3819301892],
    [0.00001207053, 0.7528593316, 351.8165923087],
    [0.00001071399, 1.13567265104, 1155.361157407],
    [0.00001020922, 5.91233512844, 1685.0521225016],
    [0.00001315042, 5.11202572637, 211.8146227297],
    [0.00001295553, 4.69184139933, 1898.3512179396],
    [0.00001099037, 1.81765118601, 149.5631971346],
    [0.00000998462, 2.63131596867, 200.7689224658],
    [0.00000985869, 2.25992849742, 956.2891559706],
    [0.00000932434, 3.66980793184, 554.0699874828],
    [0.00000664481, 0.60297724821, 728.762966531],
    [0.0000065985, 4.66635439533, 195.1398481733],
    [0.0000061774, 5.62092000007, 942.062061969],
    [0.00000626382, 5.9420823259, 1478.8665740644],
    [0.0000048223, 1.84070179496, 479.2883889155],
    [0.00000487689, 2.79373616806, 3.1813937377],
    [0.00000470086, 0.8384775504, 1471.7530270636],
    [0.00000451817, 5.64468459871, 2001.4439921582],
    [0.00000553128, 3.41088600844, 269.9214467406],
    [0.00000534397, 1.26443331367, 275.5505210331],
    [0.00000472572, 1.8819858466, 515.463871093],
    [0.00000405434, 1.64001413521, 536.8045120954],
    [0.00000517196, 4.44310450526, 2214.7430875962],
    [0.00000452848, 3.00349117198, 302.164775655],
    [0.0000049434, 2.28626675074, 278.5194664497],
    [0.00000489825, 5.80631420383, 191.2076949102],
    [0.00000427459, 0.05741344372, 284.1485407422],
    [0.00000339763, 1.40198657693, 440.8252848776],
    [0.00000340627, 0.89091104306, 628.8515860501],
    [0.00000385974, 1.99700402508, 1272.6810256272],
    [0.00000288298, 1.12160250272, 422.6660376129],
    [0.00000294444, 0.42577061903, 312.1990839626],
    [0.0000026249, 0.31753439818, 1045.1548361876],
    [0.00000295331, 0.67144493789, 88.865680217],
    [0.00000342968, 5.85600322299, 1795.258443721],
    [0.00000341117, 2.3758524725, 525.4981794006],
    [0.00000234018, 4.22756813216, 114.1384744825],
    [0.00000223729, 2.28129446763, 330.6189636582],
    [0.00000275814, 0.47832439352, 38.1330356378],
    [0.00000224592, 0.54754005675, 1788.1448967202],
    [0.000003033, 0.87946670205, 6069.7767545534],
    [0.00000292103, 6.2142061192, 210.8514148832],
    [0.00000226121, 0.37495223398, 142.4496501338],
    [0.00000277257, 5.31917702012, 692.5874843535],
    [0.00000242911, 5.37187983246, 1258.4539316256],
    [0.00000205571, 0.95755250527, 288.0806940053],
    [0.00000207567, 5.38126259725, 2317.8358618148],
    [0.00000186835, 6.03591766061, 404.5067903482],
    [0.00000218536, 5.25607043545, 212.3358875915],
    [0.00000222155, 5.94588016768, 39.3568759152],
    [0.00000179673, 4.41045924362, 408.4389436113],
    [0.0000024144, 1.1252586811, 388.4651552382],
    [0.00000197093, 3.9014194285, 52.6901980395],
    [0.00000236639, 0.90802744873, 1375.7737998458],
    [0.00000171915, 5.56318632797, 213.3472795478],
    [0.00000169865, 2.8566755401, 99.1606209555],
    [0.00000214398, 4.20253525974, 2531.1349572528],
    [0.0000017201, 2.36537801012, 213.2509113282],
    [0.00000165707, 2.63679789706, 215.7467759928],
    [0.00000230892, 5.49463421262, 191.9584544356],
    [0.00000177585, 0.38155817719, 430.5303441391],
    [0.00000191514, 2.95906900704, 437.6438911399],
    [0.0000016325, 3.4583251728, 617.8058857862],
    [0.00000162305, 5.73050678664, 203.0041546995],
    [0.00000175108, 5.71404465044, 1066.49547719],
    [0.00000183041, 5.66851947172, 2111.6503133776],
    [0.00000150077, 4.40663921925, 417.0369633204],
    [0.00000187935, 6.07916265661, 563.6312150384],
    [0.00000145127, 5.08176368814, 423.4167971383],
    [0.00000137491, 5.43912787991, 222.8603229936],
    [0.00000172824, 1.8492099409, 1589.0728952838],
    [0.00000165478, 2.89132196119, 214.2623032845],
    [0.00000145727, 1.56565192483, 831.8557407496],
    [0.00000176864, 2.30323752987, 9999.986450773],
    [0.00000128877, 2.55338644107, 414.0680179038],
    [0.00000120093, 0.04329750542, 1361.5467058442],
    [0.00000143441, 0.9981735772, 76.2660712756],
    [0.00000108747, 2.09282278191, 207.6700211455],
    [0.00000132106, 2.85902597898, 312.4597163935],
    [0.00000112238, 0.26221759151, 2104.5367663768],
    [0.00000125186, 4.78354048063, 205.2223405907],
    [0.00000104427, 3.63671899047, 65.2203710117],
    [0.00000107447, 3.67064138701, 212.7778305762],
    [0.00000108642, 2.85492389024, 21.3406410024],
    [0.00000097743, 5.12231845599, 2634.2277314714],
    [0.00000109097, 1.63231061493, 208.633228992],
    [0.00000096852, 4.19928280035, 305.3461693927],
    [0.00000096507, 2.56002066845, 1692.1656695024],
    [0.00000085829, 4.54545085982, 210.3783341312],
    [0.00000099249, 5.13816222131, 1574.8458012822],
    [0.00000112532, 5.03109281265, 703.6331846174],
    [0.00000084023, 1.18337717265, 429.7795846137],
    [0.00000089021, 5.38791571457, 107.0249274817],
    [0.00000110191, 2.43656081234, 355.7487455718],
    [0.00000090659, 4.20908809746, 213.8203602998],
    [0.00000095885, 5.44594259071, 2428.0421830342],
    [0.00000094109, 2.39786381418, 483.2205421786],
    [0.00000085609, 0.03354346966, 860.3099287528],
    [0.00000088796, 4.0576630675, 128.9562693151],
    [0.00000081951, 1.66499731549, 62.2514255951],
    [0.0000009124, 3.96942332591, 2847.5268269094],
    [0.00000083961, 4.60845858022, 177.8743727859],
    [0.00000088376, 3.86800515885, 140.001969579],
    [0.00000093308, 0.73846639887, 831.1049812242],
    [0.00000091872, 2.9497760532, 35.4247226521],
    [0.00000087077, 1.33390590052, 1905.4647649404],
    [0.00000096584, 4.84438390997, 131.4039498699],
    [0.0000007101, 0.99334817658, 405.2575498736],
    [0.00000095266, 2.51506908152, 2.4476805548],
    [0.00000072514, 4.63213873657, 245.5424243524],
    [0.0000008258, 1.52823217919, 145.6310438715],
    [0.00000076693, 3.15240783008, 767.3690829208],
    [0.00000070317, 4.0425370727, 173.9422195228],
    [0.00000086015, 2.3010372727, 85.8272988312],
    [0.00000066529, 4.75053522835, 70.8494453042],
    [0.00000065835, 2.46869725001, 280.9671470045],
    [0.00000064824, 0.09343869325, 9.5612275556],
    [0.00000071557, 0.01212415296, 565.1156877467],
    [0.00000066533, 1.08034871114, 339.2864193365],
    [0.00000063488, 2.01740971153, 234.6397364404],
    [0.00000060786, 5.12026947473, 756.3233826569],
    [0.00000058123, 6.05732868566, 1677.9385755008],
    [0.00000064236, 1.28586474622, 1148.2476104062],
    [0.00000073124, 4.37810889148, 425.1137181677],
    [0.00000055012, 3.85865703217, 342.2553647531],
    [0.00000057101, 6.26689214029, 2420.9286360334],
    [0.0000006409, 4.09854757476, 327.4375699205],
    [0.00000055306, 1.60456896521, 543.0242872189],
    [0.00000057987, 5.4726912434, 347.8844390456],
    [0.00000073581, 3.72292337326, 92.0470739547],
    [0.0000007376, 3.57045342615, 1.4844727083],
    [0.0000006494, 2.44739629174, 267.4737661858],
    [0.00000054414, 3.71479080197, 344.7030453079],
    [0.00000049783, 3.93453970179, 192.6921676185],
    [0.00000049537, 3.22831070579, 333.657345044],
    [0.00000047539, 3.92925402178, 199.2844497575],
    [0.00000049368, 4.90341763553, 217.491881132],
    [0.00000062711, 4.40120079629, 214.7835681463],
    [0.00000046359, 2.09430260266, 212.5483359126],
    [0.00000046289, 2.6403845348, 10.2949407385],
    [0.00000054335, 1.07179534996, 362.8622925726],
    [0.00000058742, 2.62270940799, 225.8292684102],
    [0.00000048457, 3.15166418511, 216.2198567448],
    [0.00000046316, 4.8622664277, 2950.619601128],
    [0.0000004597, 4.97297391881, 198.321241911],
    [0.00000046678, 2.44960215701, 207.1487562837],
    [0.00000044905, 1.77616995803, 223.5940361765],
    [0.00000044521, 5.55987055442, 264.5048207692],
    [0.00000055914, 4.29520232351, 329.7251917809],
    [0.00000049643, 5.20789299388, 2744.4340526908],
    [0.00000058829, 4.23073947869, 700.6642392008],
    [0.00000052629, 3.7923062907, 343.2185725996],
    [0.00000041532, 0.74488808688, 125.9873238985],
    [0.00000047767, 2.39260015876, 207.8824694666],
    [0.00000056157, 2.07214273531, 124.433415221],
    [0.00000043345, 1.83707598036, 106.2741679563],
    [0.00000039793, 4.00870764324, 12.5301729722],
    [0.00000053882, 4.97905460628, 134.5853436076],
    [0.00000050135, 5.75914508514, 320.3240229197],
    [0.0000004496, 5.35721924134, 218.9281697305],
    [0.00000041089, 4.92252591399, 1891.2376709388],
    [0.00000046509, 2.06623129884, 2008.557539159],
    [0.00000042949, 0.39856812529, 357.4456666012],
    [0.00000037992, 2.06495914285, 247.2393453818],
    [0.00000048733, 5.32762223699, 3127.3133312618],
    [0.00000034583, 5.62555932761, 99.9113804809],
    [0.00000041092, 2.4726489737, 237.6781178262],
    [0.00000040763, 4.08408559215, 621.7380390493],
    [0.00000034213, 0.73077393007, 750.1036075334],
    [0.00000033967, 5.31264617621, 206.233732547],
    [0.00000036509, 1.6882677575, 22.0914005278],
    [0.00000039361, 3.4573071999, 241.6102710893],
    [0.00000034796, 2.24780137629, 487.3651437628],
    [0.00000033049, 4.86593901955, 209.106309744],
    [0.00000032584, 2.22713131846, 319.5732633943],
    [0.00000039035, 3.73870591196, 3163.918696566],
    [0.00000032722, 1.06640549236, 252.6559713532],
    [0.00000038671, 4.39617126814, 18.1592472647],
    [0.00000034514, 1.8260750069, 380.12776796],
    [0.00000041539, 0.08136234251, 210.3301500214],
    [0.00000033527, 5.80475568528, 251.4321310758],
    [0.00000031221, 1.96489151107, 244.318584075],
    [0.00000030521, 2.26854188579, 1169.5882514086],
    [0.00000034828, 5.96324553131, 217.964961884],
    [0.00000038481, 4.43707551964, 160.6088973985],
    [0.00000035998, 3.83262381556, 56.6223513026],
    [0.00000031041, 4.89914223233, 144.1465711632],
    [0.00000032342, 3.58191018804, 231.4583427027],
    [0.00000028838, 5.80081031514, 1994.3304451574],
    [0.00000032175, 2.13166877923, 206.1373643274],
    [0.00000032643, 1.93131580544, 98.8999885246],
    [0.00000034917, 5.65276617691, 497.4476361802],
    [0.00000028928, 2.2165328892, 14.977853527],
    [0.00000031569, 3.81846560564, 73.297125859],
    [0.00000032199, 0.9981184629, 1464.6394800628],
    [0.00000029153, 5.98414099408, 2737.32050569],
    [0.00000036706, 4.75493516597, 348.8476468921],
    [0.00000028665, 1.68732054583, 78.7137518304],
    [0.00000027501, 6.12086395418, 214.0498549634],
    [0.00000028795, 0.04448605904, 5.6290742925],
    [0.00000027205, 0.24587543816, 313.2104759189],
    [0.00000032441, 3.77921585847, 33.9402499438],
    [0.00000027088, 5.2031009802, 148.0787244263],
    [0.00000034956, 3.43886187587, 273.1028404783],
    [0.00000033076, 2.44662095168, 969.6224780949],
    [0.00000027745, 1.44598606685, 258.8757464767],
    [0.00000027178, 4.2591859622, 179.3588454942],
    [0.00000027872, 0.78772093522, 546.956440482],
    [0.00000029106, 4.83947711462, 905.8865797915],
    [0.00000027417, 2.44930366818, 254.9435932136],
    [0.00000034296, 6.00920969644, 166.828672522],
    [0.00000028859, 6.0291724991, 188.9200730498],
    [0.00000026001, 0.65046992484, 654.1243803156],
    [0.0000003356, 1.23732329127, 2221.856634597],
    [0.00000024356, 0.5224875133, 894.8408795276],
    [0.00000027767, 5.17820678484, 5.4166259714],
    [0.00000025568, 3.35897159622, 0.9632078465],
    [0.00000022879, 3.5129348069, 458.8415197904],
    [0.00000024496, 0.00976884124, 69.1525242748],
    [0.00000028794, 0.75545700854, 488.8496164711],
    [0.00000031228, 2.05299907796, 282.4516197128],
    [0.00000025438, 5.2903772925, 636.7158925763],
    [0.00000025332, 4.9700796945, 3060.8259223474],
    [0.00000023596, 2.54766434769, 196.6243208816],
    [0.00000029602, 3.92688207792, 206.706813299],
    [0.00000028255, 2.72125009693, 32.2433289144],
    [0.00000022115, 4.75775237642, 213.1872208534],
    [0.0000002213, 3.25436709191, 681.5417840896],
    [0.00000021675, 4.61403328597, 3267.0114707846],
    [0.00000022115, 3.16759500067, 213.4109700226],
    [0.00000026912, 2.86269769133, 24.3790223882],
    [0.00000020737, 1.66895754198, 274.0660483248],
    [0.00000028309, 4.73122154345, 552.5855147745],
    [0.00000025252, 5.11986371899, 168.0525127994],
    [0.00000026364, 1.59272536419, 491.8185618877],
    [0.00000021995, 0.8807900928, 635.9651330509],
    [0.00000027076, 5.53694832022, 555.5544601911],
    [0.00000019683, 2.14388519695, 54.1746707478],
    [0.00000027266, 3.57891326986, 561.1835344836],
    [0.00000025162, 1.78070903718, 182.279606801],
    [0.00000021386, 3.86030772476, 116.4260963429],
    [0.00000025572, 1.62093861709, 2324.9494088156],
    [0.00000020025, 2.90618582553, 120.358249606],
    [0.00000019882, 5.59203696008, 4.192785694],
    [0.00000019454, 0.10623632006, 218.7157214094],
    [0.00000025617, 2.09931460158, 248.7238180901],
    [0.00000019804, 2.52180124343, 1485.9801210652],
    [0.00000018516, 2.54810951896, 213.5115437591],
    [0.00000019831, 0.07955320843, 842.1506814881],
    [0.00000018516, 5.3775511051, 213.0866471169],
    [0.00000023655, 1.59974907716, 738.7972748386],
    [0.00000020375, 2.94653107321, 59.8037450403],
    [0.00000024247, 3.15387696867, 240.3864308119],
    [0.00000018294, 3.18715992969, 295.0512286542],
    [0.00000017464, 2.90471803626, 477.8039162072],
    [0.00000020698, 1.07232100334, 494.2662424425],
    [0.000000204, 1.83665590916, 533.6231183577],
    [0.00000021285, 0.63341794388, 189.7232222019],
    [0.00000016116, 0.60069688498, 746.9222137957],
    [0.00000016297, 3.98317294128, 2.9207613068],
    [0.00000016922, 4.74266972033, 2207.6295405954],
    [0.00000020479, 6.05098286202, 173.6815870919],
    [0.00000015447, 1.49120311247, 543.9180590962],
    [0.00000019944, 4.9408663275, 121.2520214833],
    [0.00000017127, 0.71458025372, 1781.0313497194],
    [0.0000001724, 0.67749766724, 151.0476698429],
    [0.00000015574, 5.70296527381, 3053.7123753466],
    [0.00000015036, 5.52770334605, 2310.722314814],
    [0.00000015928, 4.45642717299, 643.8294395771],
    [0.00000016165, 0.63286131026, 358.9301393095],
    [0.00000014589, 5.26158292613, 472.1748419147],
    [0.00000016545, 3.52813228069, 3480.3105662226],
    [0.00000018912, 0.55218675639, 4.665866446],
    [0.00000017595, 2.26495491189, 672.1406152284],
    [0.00000018104, 2.71285673689, 181.806526049],
    [0.00000015918, 5.23446779429, 135.5485514541],
    [0.00000013931, 3.19357128657, 213.5597278689],
    [0.00000014058, 0.82375896652, 221.3758502853],
    [0.00000013931, 4.73208739639, 213.0384630071],
    [0.0000001469, 2.65882838685, 292.0128472684],
    [0.00000014454, 0.21819892811, 235.3904959658],
    [0.00000016168, 0.91025406068, 280.003939158],
    [0.00000013327, 3.54947442109, 205.6642835754],
    [0.00000016104, 0.82547975762, 176.6505325085],
    [0.00000016441, 5.39398801335, 424.1505103212],
    [0.00000012747, 0.75780958758, 721.6494195302],
    [0.00000012754, 3.55466871752, 153.4953503977],
    [0.00000014448, 0.12049617049, 313.6835566709],
    [0.00000016499, 3.26383140489, 6283.0758499914],
    [0.00000016564, 1.62649604519, 5856.4776591154],
    [0.0000001495, 1.23923264394, 2641.3412784722],
    [0.00000015724, 1.18874754834, 486.4019359163],
    [0.00000011893, 0.91693668558, 416.3032501375],
    [0.00000011684, 1.11385455828, 81.7521332162],
    [0.00000012985, 4.74373293725, 3377.217792004],
    [0.00000011864, 0.64411806416, 28.3111756513],
    [0.00000013216, 4.9590402443, 1279.794572628],
    [0.00000016121, 0.98185208328, 2538.2485042536],
    [0.000000149, 1.76649832526, 569.0478410098],
    [0.00000011337, 4.36555105334, 3583.4033404412],
    [0.00000011253, 5.98638731448, 193.655375465],
    [0.00000014753, 2.92291248767, 167.0893049529],
    [0.00000013774, 2.50808183571, 1802.3719907218],
    [0.00000011068, 0.00471764868, 629.6023455755],
    [0.00000012781, 3.62178749219, 67.6680515665],
    [0.00000012238, 0.27163151602, 1044.4040766622],
    [0.00000011021, 0.15223056578, 501.3797894433],
    [0.00000014206, 2.63254885854, 618.5566453116],
    [0.00000014365, 0.37819794671, 601.7642506762],
    [0.00000015034, 2.67095006272, 46.470422916],
    [0.00000012248, 2.19751851112, 650.9429865779],
    [0.00000010783, 2.86375137884, 113.3877149571],
    [0.00000011418, 1.20874560246, 172.2452984934],
    [0.00000014613, 6.05645353059, 468.2426886516],
    [0.0000001058, 2.05903854864, 429.0458714308],
    [0.00000013721, 2.20936291526, 228.276948965],
    [0.0000001218, 1.82585577726, 241.8709035202],
    [0.00000010787, 5.06924118186, 162.8965192589],
    [0.00000012056, 3.20018724042, 72.0732855816],
    [0.00000012233, 4.5074193097, 425.6349830295],
    [0.00000012101, 4.14977794161, 1108.1399749656],
    [0.00000009843, 1.49451039604, 226.6324175623],
    [0.00000010287, 2.10680007784, 1033.3583763983],
    [0.00000009975, 2.81640446254, 518.6452648307],
    [0.00000009597, 4.80028087522, 426.6463749858],
    [0.00000010746, 4.66838299108, 129.9194771616],
    [0.00000012961, 5.11568581806, 219.4494345923],
    [0.00000012302, 5.335685477, 776.9303104764],
    [0.00000009484, 4.85702954575, 820.0592809603],
    [0.00000011441, 3.85769732764, 405.9912630565],
    [0.00000009625, 1.60280478656, 426.5500067662],
    [0.00000009164, 0.7020456798, 403.0223176399],
    [0.00000010112, 2.7648687563, 210.5907824523],
    [0.00000010816, 1.36864298163, 170.7608257851],
    [0.00000010187, 2.36063948382, 685.4739373527],
    [0.00000012397, 6.06349943525, 875.830299001],
    [0.00000012146, 2.04060386262, 508.3503240922],
    [0.00000009574, 3.19555214859, 286.596221297],
    [0.00000010193, 4.01123146905, 381.3516082374],
    [0.000000089, 3.6326023588, 319.3126309634],
    [0.00000010052, 5.1610725104, 216.0074084237],
    [0.00000008528, 3.88076551354, 630.3360587584],
    [0.00000008875, 5.46623776078, 3370.1042450032],
    [0.00000008401, 5.65557131026, 213.4591541324],
    [0.00000010033, 5.97497644283, 6.1503391543],
    [0.00000008401, 2.27009862215, 213.1390367436],
    [0.00000011661, 0.95163302252, 694.0719570618],
    [0.00000008696, 2.33868966556, 220.364458329],
    [0.00000008141, 5.5405974715, 220.4608265486],
    [0.00000009615, 2.75755414306, 556.5176680376],
    [0.0000000912, 0.44322374149, 2097.423219376],
    [0.00000008109, 5.53989498262, 181.0557665236],
    [0.00000010763, 0.05616402982, 691.1030116452],
    [0.00000009579, 2.84979792871, 184.0941479094],
    [0.00000009958, 2.38581008546, 945.2434557067],
    [0.00000008526, 0.17821781104, 289.5651667136],
    [0.000000077, 0.0048137541, 7.1617311106],
    [0.00000008613, 0.82900327241, 2957.7331481288],
    [0.00000009517, 2.27516458273, 8.0767548473],
    [0.00000009049, 3.3733502579, 731.9443602687],
    [0.00000007888, 5.78452089815, 230.8252032563],
    [0.00000007684, 3.10462250617, 7.065362891],
    [0.00000007391, 5.29648701813, 2627.1141844706],
    [0.00000009875, 4.69411059509, 10213.285546211],
    [0.00000007328, 0.09051133382, 100.6450936638],
    [0.00000007999, 1.60928374337, 696.5196376166],
    [0.000000076, 4.90078510977, 51.2057253312],
    [0.00000009928, 5.25713005643, 699.7010313543],
    [0.00000007333, 5.61982406824, 31.492569389],
    [0.00000007376, 4.52737009022, 616.3214130779],
    [0.00000009422, 2.44475274779, 2118.7638603784],
    [0.000000073, 4.0188547501, 212.0270710508],
    [0.00000007502, 4.71301501745, 436.1594184316],
    [0.00000009071, 2.75662160229, 130.4407420234],
    [0.00000008913, 2.19608557019, 427.5613987225],
    [0.00000008801, 4.26655882704, 141.2258098564],
    [0.00000006853, 5.69082635009, 480.7728616238],
    [0.00000007765, 3.27218537808, 3796.7024358792],
    [0.00000009159, 3.0471367165, 9786.687355335],
    [0.00000009034, 2.04165937353, 204.7010757289],
    [0.00000006902, 4.61962635489, 2524.021410252],
    [0.00000006728, 0.58794595002, 739.8086667949],
    [0.00000006741, 0.52362906624, 135.336103133],
    [0.00000008201, 5.03994203224, 411.620337349],
    [0.0000000724, 3.90653111215, 214.5711198252],
    [0.00000006887, 4.11954799957, 662.531203563],
    [0.00000006566, 2.67659365854, 194.1766403268],
    [0.00000006539, 6.25585361704, 31.019488637],
    [0.00000007484, 5.56871021201, 271.4059194489],
    [0.00000008078, 3.0995581756, 353.301065017],
    [0.00000007072, 1.10066698352, 282.6640680339],
    [0.00000006089, 0.79684364835, 593.426863398],
    [0.0000000614, 3.79672343724, 180.1619946463],
    [0.00000006703, 3.8285424862, 412.5835451955],
    [0.00000006024, 5.46288776207, 724.8308132679],
    [0.00000008102, 4.51051495778, 268.4369740323],
    [0.00000006033, 1.24326252021, 447.9388318784],
    [0.00000007425, 2.29394888999, 532.6117264014],
    [0.00000006007, 2.87215425398, 426.0769260142],
    [0.00000007568, 0.79147591036, 2854.6403739102],
    [0.00000005816, 1.70824982811, 50.4025761791],
    [0.00000007534, 5.3859829268, 953.1077622329],
    [0.00000005863, 2.04201456623, 454.9093665273],
    [0.00000007291, 0.88044346877, 457.617679513],
    [0.00000006235, 4.51960341418, 3693.6096616606],
    [0.00000006359, 6.27053660532, 313.9441891018],
    [0.00000005722, 0.47241118592, 610.6923387854],
    [0.00000005704, 0.45599464136, 643.0786800517],
    [0.00000006176, 3.98739420856, 835.0371344873],
    [0.0000000573, 0.5081424249, 1038.0412891868],
    [0.00000006812, 4.2046338569, 938.1299087059],
    [0.0000000562, 4.08049141112, 3899.7952100978],
    [0.0000000677, 4.22172125738, 916.9322800554],
    [0.00000006069, 3.46762401122, 278.2588340188],
    [0.00000005875, 5.51773010551, 1073.6090241908],
    [0.00000005558, 3.29478679376, 20.6069278195],
    [0.00000006274, 4.88767368263, 0.5212648618],
    [0.00000005794, 4.09991767938, 391.1734682239],
    [0.00000005442, 2.79802608247, 397.3932433474],
    [0.00000005754, 4.42718264879, 165.6048322446],
    [0.00000005879, 6.17871525366, 291.262087743],
    [0.00000006716, 2.1866384773, 627.3671133418],
    [0.00000005761, 0.62536160332, 114.3991069134],
    [0.00000005359, 2.29390692216, 331.2096644892],
    [0.0000000621, 4.92273259045, 450.9772132642],
    [0.00000006686, 2.13438181268, 285.6330134505],
    [0.00000005173, 4.10128119721, 6.592282139],
    [0.00000005707, 3.48716972669, 230.5645708254],
    [0.00000006363, 5.64626069194, 518.3846323998],
    [0.00000005241, 3.78081098206, 418.5214360287],
    [0.00000005191, 4.39595146262, 84.3428261229],
    [0.0000000671, 2.96748528229, 624.919432787],
    [0.00000004931, 2.71959451867, 558.0021407459],
    [0.00000005225, 4.65463431385, 310.7146112543],
    [0.00000004857, 2.61373582429, 66.70484372],
    [0.00000004847, 3.76991373317, 423.6774295692],
    [0.00000005284, 1.96024672163, 1182.9215735329],
    [0.00000005933, 2.74003948393, 219.891377577],
    [0.00000006373, 1.4129634646, 606.7601855223],
    [0.00000004728, 0.23421038001, 1063.3140834523],
    [0.00000006408, 1.1668741968, 268.9582388941],
    [0.00000004782, 1.56813683227, 420.9691165835],
    [0.00000005399, 4.57611449409, 238.9019581036],
    [0.00000005161, 0.14436456585, 2413.8150890326],
    [0.00000004858, 5.21378840436, 3686.4961146598],
    [0.00000005086, 1.73392381835, 337.732510659],
    [0.0000000465, 3.7102912129, 305.0855369618],
    [0.00000004896, 3.6778653184, 240.125798381],
    [0.00000005949, 0.29956165181, 524.0137066923],
    [0.00000004968, 2.53258931342, 980.6681783588],
    [0.00000004944, 2.16189522746, 104.0559820651],
    [0.00000005366, 3.54867806985, 107.2855599126],
    [0.00000004917, 0.48641512683, 3274.1250177854],
    [0.00000005617, 6.27593478237, 112.6540017742],
    [0.00000004524, 5.09539085552, 103.1409583284],
    [0.00000005643, 1.5272433648, 105.5404547734],
    [0.00000004504, 1.68251875362, 196.0336200506],
    [0.00000004897, 4.90011892854, 102.1295663721],
    [0.00000004525, 1.88735156553, 103.0445901088],
    [0.00000004327, 1.4540722938, 409.9234163196],
    [0.00000005095, 3.40640608336, 427.1194557378],
    [0.00000005782, 3.55197606731, 25874.6040461362],
    [0.00000004192, 0.16603430914, 958.576777831],
    [0.00000004976, 0.50639895683, 511.5317178299],
    [0.00000004167, 5.9472576207, 316.4400537664],
    [0.00000004353, 3.78587101731, 1171.875873269],
    [0.00000005387, 2.03693287651, 2435.155730035],
    [0.00000004067, 4.6659260313, 106.0135355254],
    [0.00000004817, 3.53529781673, 960.2213092337],
    [0.00000004048, 3.20024146722, 775.233389447],
    [0.00000004016, 6.00569143107, 945.9942152321],
    [0.00000003989, 3.15130319196, 115.6229471908],
    [0.00000004559, 5.59555355771, 778.4147831847],
    [0.00000004153, 2.75042736587, 316.3436855468],
    [0.00000003983, 2.00842137744, 597.3590166611],
    [0.00000004212, 4.16852690218, 823.9914342234],
    [0.00000005193, 0.71717111984, 810.6581120991],
    [0.00000003927, 5.04361736754, 2943.5060541272],
    [0.00000004225, 0.02571003853, 0.7507595254],
    [0.00000004926, 1.12994881124, 526.9826521089],
    [0.0000000417, 3.94116290117, 422.405405182],
    [0.00000004432, 3.995990468, 393.4610900843],
    [0.0000000384, 1.21234108241, 212.0752551606],
    [0.00000003866, 4.20930793423, 97.6761482472],
    [0.0000000444, 1.35536679738, 211.6021744086],
    [0.0000000384, 0.43014354282, 214.5229357154],
    [0.00000004724, 3.62039208608, 638.4128136057],
    [0.0000000487, 5.7587459962, 1246.6574718363],
    [0.00000004449, 1.43384065964, 184.9879197867],
    [0.00000003931, 2.36660272585, 909.8187330546],
    [0.00000003787, 5.98932416906, 325.9530972122],
    [0.00000003665, 0.72917314141, 20.4468691251],
    [0.00000004243, 2.29103096797, 453.424893819],
    [0.0000000373, 6.24831601183, 159.1244246902],
    [0.000000039, 1.31013240315, 850.0149880143],
    [0.00000005134, 1.97348901289, 526.5095713569],
    [0.00000003621, 2.77435773661, 123.5396433437],
    [0.00000003607, 5.3205884271, 406.954470903],
    [0.00000003802, 1.94444523548, 421.1815649046],
    [0.00000003906, 3.02475451573, 317.3550775031],
    [0.00000004473, 0.80804073855, 838.218528225],
    [0.00000004081, 2.0873246818, 988.532484885],
    [0.00000003843, 4.99347148246, 7.6348118626],
    [0.00000004467, 6.09037793116, 760.25553592],
    [0.00000003514, 3.97285766412, 426.4863162914],
    [0.00000003504, 0.85064201666, 299.1263942692],
    [0.00000004397, 1.68577228317, 824.7421937488],
    [0.00000003581, 2.35235960566, 337.8019466282],
    [0.00000004606, 3.48411642192, 913.9633346388],
    [0.0000000379, 3.64538213705, 216.2680408546],
    [0.00000003496, 0.95035381131, 436.8931316145],
    [0.00000004422, 0.82822191292, 43.2890291783],
    [0.00000003688, 2.837854438, 739.0579072695],
    [0.00000004439, 1.19409419107, 421.93232443],
    [0.00000003572, 2.77298538478, 444.7574381407],
    [0.0000000442, 5.44308967028, 963.4027029714],
    [0.00000004443, 3.73070830296, 37.8724032069],
    [0.00000004322, 4.75680702521, 40.8413486235],
    [0.00000003724, 0.59005210557, 256.4280659219],
    [0.00000004471, 2.22367643527, 318.8395502114],
    [0.00000004184, 1.5271919664, 298.2326223919],
    [0.00000003534, 5.0193759957, 386.9806825299],
    [0.000000034, 3.22663067085, 4113.0943055358],
    [0.00000004556, 1.35715974815, 495.7507151508],
    [0.00000004453, 1.80417064247, 829.6205085159],
    [0.00000003617, 1.51036385224, 41.6444977756],
    [0.00000003789, 4.80357656146, 238.4288773516],
    [0.00000003514, 2.38272766645, 426.7100654606],
    [0.00000003208, 1.74465274123, 952.3570027075],
    [0.00000004398, 2.65839000906, 832.5894539325],
    [0.00000004092, 3.07954777295, 60.7669528868],
    [0.00000003813, 5.63047104819, 315.4286618101],
    [0.00000003219, 6.22278803635, 754.8389099486],
    [0.00000003102, 2.69222024257, 343.7398374614],
    [0.00000004045, 4.024637721, 376.1956146969],
    [0.00000003576, 0.3853278728, 214.9960164674],
    [0.00000003291, 5.49542015261, 143.9341228421],
    [0.00000003981, 5.75449411958, 239.1625905345],
    [0.00000003249, 0.58789568678, 619.2903584945],
    [0.00000003114, 0.02831060137, 221.1634019642],
    [0.00000003555, 3.12207684735, 1048.3362299253],
    [0.0000000301, 1.91180343491, 93.531546663],
    [0.00000003384, 1.81702854004, 443.8636662634],
    [0.00000003222, 2.37342117781, 429.5189521828],
    [0.00000003431, 5.92099840679, 570.7447620392],
    [0.00000003271, 2.04947945059, 806.725958836],
    [0.00000003207, 5.44018976766, 402.2191684878],
    [0.00000003091, 0.10717557454, 3590.516887442],
    [0.00000002951, 1.76365810296, 426.8106391971],
    [0.00000002958, 0.23653889192, 1354.4331588434],
    [0.00000002948, 4.59289832104, 426.3857425549],
    [0.00000003506, 5.43222584214, 84.9335269539],
    [0.00000002894, 5.69678330542, 1262.3860848887],
    [0.00000003682, 1.07122313007, 395.578702239],
    [0.00000002983, 5.25093816048, 313.4711083498],
    [0.00000003117, 4.18767239237, 366.7944458357],
    [0.00000002873, 4.45472312727, 361.3778198643],
    [0.00000003521, 2.05528981993, 1261.6353253633],
    [0.00000003496, 1.87950759078, 439.1283638482],
    [0.00000003012, 0.64439385874, 263.0203480609],
    [0.00000002849, 1.12491777974, 262.0571402144],
    [0.0000000291, 2.76192171681, 541.5398145106],
    [0.00000003322, 6.08893948791, 108.7218485111],
    [0.00000003181, 1.01419299056, 418.0001711669],
    [0.00000002793, 0.38781777981, 211.8628068395],
    [0.00000003091, 2.18216748751, 306.830642101],
    [0.00000003748, 3.89145855821, 220.9339073006],
    [0.00000002982, 1.99831689446, 117.9105690512],
    [0.00000002793, 1.25466684542, 214.7353840365],
    [0.00000003512, 1.50965040301, 885.4397106664],
    [0.00000002716, 0.80710391613, 757.2171545342],
    [0.00000003137, 2.09889265033, 2751.5475996916],
    [0.00000002738, 4.89270330923, 464.7312265138],
    [0.00000002875, 4.28436709414, 4010.0015313172],
    [0.00000003313, 3.01452486457, 336.8387387817],
    [0.00000002746, 2.69963506928, 380.3884003909],
    [0.00000003132, 2.19562786872, 2.9689454166],
    [0.00000003233, 0.60809684558, 3171.0322435668],
    [0.00000003034, 0.93246285284, 205.4347889118],
    [0.00000003006, 5.91067479448, 2.7083129857],
    [0.00000003643, 5.58302397259, 423.6292454594],
    [0.00000002625, 1.07042050691, 23.5758732361],
    [0.00000003495, 0.1988756203, 576.1613880106],
    [0.0000000259, 0.2125277375, 110.2545053292],
    [0.00000002704, 6.12908233599, 572.2292347475],
    [0.00000002568, 0.17571588314, 1056.2005364515],
    [0.00000002583, 2.96927378731, 384.0599212231],
    [0.00000002555, 3.96441052072, 430.79097657],
    [0.00000002786, 2.54945911818, 195.8906076987],
    [0.00000002869, 4.82964665921, 710.7467316182],
    [0.00000002534, 5.31005598763, 427.3489504014],
    [0.00000002618, 1.22081401503, 36.6485629295],
    [0.00000003464, 2.328113282, 285.3723810196],
    [0.00000003374, 3.34109586766, 162.0933701068],
    [0.00000002694, 4.64149271687, 140.9651774255],
    [0.00000002603, 0.99527295832, 92.3077063856],
    [0.0000000314, 5.4079027758, 328.2407190726],
    [0.00000002603, 4.3153279088, 561.934294009],
    [0.00000002987, 0.82758128867, 45.5766510387],
    [0.00000002959, 3.35623851523, 273.8536000037],
    [0.00000002561, 0.54160683162, 107.7586406646],
    [0.000000029, 1.20691455948, 462.0229135281],
    [0.00000002648, 1.90547819027, 88.1149206916],
    [0.00000002461, 4.68211868869, 2840.4132799086],
    [0.00000002534, 5.00311256556, 431.264057322],
    [0.00000002521, 3.3216047231, 136.0698163159],
    [0.00000002945, 1.06452531856, 732.6951197941],
    [0.00000002654, 1.36744710395, 460.5384408198],
    [0.00000003297, 1.33975572602, 305.6068018236],
    [0.00000002634, 2.299955338, 519.3960243561],
    [0.00000002805, 5.62255444533, 1699.2792165032],
    [0.00000002439, 5.14733660159, 303.8616966844],
    [0.00000002434, 3.71460437051, 4216.1870797544],
    [0.00000002416, 3.76296045457, 77.7505439839],
    [0.00000002803, 2.55280894914, 505.3119427064],
    [0.00000002592, 3.32836551071, 110.1581371096],
    [0.00000003074, 1.71462387764, 256.5881246163],
    [0.00000003295, 0.81766682522, 705.1176573257],
    [0.00000003183, 6.15742006608, 109.2431133729],
    [0.00000002908, 5.38534195293, 315.1680293792],
    [0.00000002326, 1.42604031905, 131.5469622218],
    [0.00000002427, 2.0462785074, 124.5028511902],
    [0.00000002632, 1.41253794767, 211.6545640353],
    [0.00000002297, 1.38016674676, 425.8474313506],
    [0.00000002318, 6.27716072818, 317.142629182],
    [0.0000000231, 4.86442292404, 3259.8979237838],
    [0.00000002873, 1.10206537875, 7.8643065262],
    [0.00000002616, 0.11849676899, 133.1008708993],
    [0.00000003213, 4.4932046169, 432.2272651685],
    [0.00000002276, 6.04688191978, 214.1022445901],
    [0.00000002276, 1.96882478275, 212.4959462859],
    [0.00000002917, 0.96774661857, 100.3844612329],
    [0.0000000289, 5.72610904534, 322.0209439491],
    [0.00000002829, 2.66887892162, 141.4864422873],
    [0.00000002695, 1.4748857107, 42.5382696529],
    [0.00000002697, 5.34002228297, 432.0148168474],
    [0.00000002229, 4.40717937246, 540.7366653585],
    [0.00000002214, 2.43714413196, 426.8588233069],
    [0.00000002512, 4.68291916658, 1596.1864422846],
    [0.00000002202, 5.91122030007, 867.4234757536],
    [0.00000002856, 0.94736445171, 41.0537969446],
    [0.00000002396, 0.10516628717, 206.9363079626],
    [0.00000002345, 1.1668526778, 640.8604941605],
    [0.00000002263, 4.62327588198, 188.0263011725],
    [0.00000002214, 3.97566024178, 426.3375584451],
    [0.00000002274, 4.9405583072, 4002.8879843164],
    [0.00000002541, 0.837056152, 12352.8526045448],
    [0.00000002145, 3.40120044084, 111.1695290659],
    [0.00000002895, 6.07389082608, 2914.0142358238],
    [0.0000000252, 1.05396310009, 184.7272873558],
    [0.00000002448, 3.49820841117, 481.7360694703],
    [0.00000002343, 2.86472924644, 207.0793203145],
    [0.00000002964, 5.96264929181, 465.9550667912],
    [0.00000002122, 4.04560058177, 118.0706277456],
    [0.00000002452, 4.35251210402, 1382.8873468466],
    [0.00000002131, 0.61211416273, 335.1418177523],
    [0.00000002116, 4.76181734842, 765.8846102125],
    [0.00000002245, 5.67078632283, 6467.9257579616],
    [0.00000002425, 0.84789834075, 550.1378342197],
    [0.00000002227, 1.15684015463, 227.3137411185],
    [0.00000002314, 6.13104971819, 2730.2069586892],
    [0.00000002344, 0.35844885568, 217.4436970222],
    [0.00000002529, 3.07975959821, 774.4826299216],
    [0.00000002523, 1.75026771081, 1578.0271950199],
    [0.00000002111, 4.24637589094, 96.8729990951],
    [0.00000002826, 1.01974994073, 87.3117715395],
    [0.00000002906, 3.75374302356, 428.0826635843],
    [0.00000002113, 2.19787343926, 449.232108125],
    [0.00000002142, 1.19671359858, 209.1544938538],
    [0.00000002882, 2.59371585952, 39.6175083461],
    [0.00000002078, 2.87503604503, 14.0146456805],
    [0.0000000209, 1.99032225653, 441.576044403],
    [0.00000002519, 2.99001165551, 745.277682393],
    [0.00000002035, 5.37147785849, 1041.2226829245],
    [0.00000002054, 1.11817372961, 842.9014410135],
    [0.00000002023, 2.94559148702, 668.2084619653],
    [0.00000002529, 4.34280159004, 221.8971151471],
    [0.00000002554, 5.56906955622, 214.1928673153],
    [0.00000002712, 1.60469055827, 1050.9963588012],
    [0.0000000235, 3.36541706919, 220.2001941177],
    [0.00000002015, 2.60446576036, 315.6411101312],
    [0.00000002158, 1.64945261993, 219.6618829134],
    [0.0000000212, 2.93968038721, 304.1223291153],
    [0.00000002357, 1.94433441808, 233.9060232575],
    [0.00000002579, 4.54124062411, 484.7050148869],
    [0.00000002046, 5.45531068264, 200.5564741447],
    [0.0000000204, 2.04492641594, 1097.0942747017],
    [0.00000002675, 1.20234167733, 28.5718080822],
    [0.00000002528, 4.69268465973, 637.4496057592],
    [0.00000002314, 2.81193072994, 25.1297819136],
    [0.00000002689, 5.03868493349, 1269.4996318895],
    [0.00000002115, 3.10772296248, 1276.6131788903],
    [0.00000002712, 1.49710379127, 3340.6124266998],
    [0.00000002138, 4.52114042624, 378.9039276826],
    [0.00000002708, 0.01014338204, 389.9496279465],
    [0.0000000256, 5.75783882561, 544.5087599272],
    [0.00000002028, 0.24331359951, 146.594251718],
    [0.00000002096, 1.44475430956, 864.2420820159],
    [0.00000001897, 4.63194412388, 220.3007678542],
    [0.00000001901, 1.78319572727, 192.8522263129],
    [0.00000002011, 4.11578325523, 315.8706047948],
    [0.00000002014, 2.26726355818, 198.1087935899],
    [0.00000001905, 2.15527255015, 326.6868103951],
    [0.00000001949, 3.95440811214, 103.6140390804],
    [0.00000002098, 5.24613314798, 175.4266922311],
    [0.00000001884, 5.66018186202, 1310.3933701397],
    [0.00000001911, 2.606654466, 301.4140161296],
    [0.0000000216, 3.42888079793, 420.005908737],
    [0.00000002325, 5.896321781, 815.0633461142],
    [0.00000001914, 0.22451332248, 171.6545976624],
    [0.00000001854, 0.04278915026, 233.7459645631],
    [0.00000001973, 2.6864025948, 769.8167634756],
    [0.00000001941, 0.61369890353, 3487.4241132234],
    [0.00000001836, 3.41496980986, 195.7729876197],
    [0.00000002554, 2.35660179716, 212.4053235607],
    [0.00000001822, 4.05510232882, 639.9454704238],
    [0.00000001883, 6.27079329518, 16.6747745564],
    [0.00000001865, 0.17460226411, 244.791664827],
    [0.00000002097, 4.58369520569, 316.9131345184],
    [0.00000001879, 2.76480572708, 28.4541880032],
    [0.00000002111, 2.92457831824, 328.9220426288],
    [0.00000002077, 0.3594303358, 589.4947101349],
    [0.00000001825, 4.04945265223, 190.4045457581],
    [0.00000001895, 3.89414880651, 334.5511169213],
    [0.00000002425, 3.76754213762, 25558.2121764796],
    [0.00000002218, 1.85341154236, 635.231419868],
    [0.00000001782, 0.86927461254, 92.7978334801],
    [0.00000002432, 3.78026263567, 1254.5217783625],
    [0.00000002106, 0.17285594964, 354.2642728635],
    [0.00000001791, 6.23892012939, 1670.8250285],
    [0.00000001996, 1.40940081042, 230.7075831773],
    [0.00000001753, 1.86660297451, 241.7532834412],
    [0.00000002093, 2.3936677788, 187.4356003415],
    [0.00000002007, 3.54083120293, 226.7924762567],
    [0.00000001949, 1.36533052698, 1385.174968707],
    [0.00000001737, 2.67583588366, 6.3627874754],
    [0.00000001868, 4.24454204649, 1119.1856752295],
    [0.00000001896, 3.81474515719, 310.9752436852],
    [0.0000000186, 3.67887919389, 1321.4390704036],
    [0.00000002305, 3.53252557028, 1570.9136480191],
    [0.00000002008, 3.88504783546, 638.9340784675],
    [0.00000001928, 2.64393870433, 525.7588118315],
    [0.00000001807, 0.76057354967, 66.1835788582],
    [0.00000001824, 0.85822155861, 639.8491022042],
    [0.00000002221, 4.8221041383, 1585.8915015461],
    [0.00000002227, 4.58488941022, 271.61836777],
    [0.00000001897, 0.6433475825, 55.6591434561],
    [0.00000001792, 0.00514800434, 827.9235874865],
    [0.00000001831, 3.69768852728, 172.4577468145],
    [0.0000000179, 4.8006297772, 3576.2897934404],
    [0.00000001698, 0.72475212282, 295.1942410061],
    [0.00000001744, 3.4525618329, 238.5718897035],
    [0.00000002334, 1.51845210531, 170.0100662597],
    [0.00000001669, 4.44620549295, 4319.279853973],
    [0.00000001939, 3.43927826945, 102.5715093568],
    [0.00000001733, 5.96815907422, 837.6972633632],
    [0.00000001686, 2.12870436615, 491.5579294568],
    [0.00000001651, 3.20586624475, 281.1795953256],
    [0.00000001884, 4.2444781245, 13.4933808187],
    [0.0000000188, 0.33845094634, 214.9436268407],
    [0.00000001817, 3.07678560214, 220.5245170234],
    [0.00000001872, 3.79328892492, 392.6579409322],
    [0.00000002195, 1.93786776664, 259.769518354],
    [0.00000001881, 4.49314034712, 199.8057146193],
    [0.00000001662, 0.29659841675, 314.9073969483],
    [0.00000001626, 2.29697402942, 3067.9394693482],
    [0.00000001927, 1.00706624515, 26.826702943],
    [0.00000001621, 0.01495920679, 1379.7059531089],
    [0.00000001655, 4.15494230496, 4326.3934009738],
    [0.00000001719, 5.9744386099, 152.5321425512],
    [0.00000001653, 5.65633302949, 448.6895914038],
    [0.0000000179, 3.73709604091, 10.0343083076],
    [0.000000016, 2.28430251221, 749.2098356561],
    [0.0000000177, 0.03256515992, 364.3467652809],
    [0.00000001939, 5.93191442558, 249.9476583675],
    [0.00000001988, 4.78810872536, 101.8689339412],
    [0.00000001667, 5.52149899431, 229.9738699944],
    [0.00000002215, 3.55121116323, 594.6507036754],
    [0.0000000195, 0.80878923373, 1049.0869894507],
    [0.00000001773, 2.55608046714, 9985.7593567714],
    [0.00000002088, 2.33165208016, 420.4478517217],
    [0.00000002107, 2.43624356568, 453.6855262499],
    [0.00000001907, 4.72569972805, 857.1285350151],
    [0.00000001609, 4.96540433043, 285.1117485887],
    [0.00000002152, 4.87024306306, 186.2117600641],
    [0.00000001685, 5.68609178354, 200.0352092829],
    [0.00000001752, 5.21532265401, 25448.00585526019],
    [0.0000000187, 6.14683645342, 347.3631741838],
    [0.00000001731, 1.95944272122, 934.9485149682],
    [0.0000000168, 5.562466977, 170.9732741062],
    [0.00000001652, 1.2452135105, 398.1440028728],
    [0.00000001548, 0.38524522125, 17.2654753874],
    [0.00000001577, 0.23430114545, 434.6749457233],
    [0.00000001652, 2.84480428863, 385.5443939314],
    [0.0000000177, 1.1505799628, 199.9657733137],
    [0.00000001528, 4.02240583348, 236.1936451179],
    [0.00000002118, 5.47803429266, 369.0820676961],
    [0.00000001543, 2.54353574089, 632.7355552034],
    [0.00000001504, 5.94300855424, 280.2163874791],
    [0.00000001495, 2.19380669867, 407.4757357648],
    [0.00000001894, 1.88797605501, 598.8434893694],
    [0.00000001515, 4.70072295492, 211.2933578679],
    [0.00000001767, 3.11910667879, 2921.1277828246],
    [0.00000001515, 3.31498374761, 215.3048330081],
    [0.00000001728, 5.28095966912, 219.5188705615],
    [0.00000001906, 5.24236020775, 248.4631856592],
    [0.00000001607, 0.80041605735, 642.3449668688],
    [0.0000000164, 2.93387205029, 1364.7280995819],
    [0.00000001585, 0.77219822539, 661.2379273164],
    [0.00000001458, 5.67666822477, 632.831923423],
    [0.00000001866, 4.40562835971, 971.1069508032],
    [0.00000001838, 0.4849219076, 1127.0499817557],
    [0.00000001903, 5.18692835916, 2015.6710861598],
    [0.0000000159, 2.8004320807, 633.7469471597],
    [0.00000001489, 4.10155671855, 77837.11123384659],
    [0.00000001573, 4.23741356107, 203.8979265768],
    [0.0000000169, 0.65475720351, 2700.7151403858],
    [0.00000001872, 3.54376036064, 354.5249052944],
    [0.00000001419, 4.53129346734, 224.6054281328],
    [0.00000001575, 3.52476647615, 373.9079928365],
    [0.00000001817, 3.9520388555, 6076.8903015542],
    [0.00000001446, 5.41423319377, 317.8763423649],
    [0.00000001552, 1.89030720529, 1304.9243545416],
    [0.00000001394, 1.86243646383, 913.7508863177],
    [0.0000000194, 4.36562864826, 432.7485300303],
    [0.00000001655, 1.31748248488, 25668.418497699],
    [0.00000001438, 5.12958189872, 71.8126531507],
    [0.00000001929, 4.90721606846, 206.3979967583],
    [0.00000001533, 2.10965059985, 378.6432952517],
    [0.00000001421, 6.22897936063, 904.4021070832],
    [0.0000000145, 1.98065714692, 205.9731001161],
    [0.00000001584, 5.94110940455, 1226.2106027112],
    [0.0000000151, 3.77771207288, 222.7002642992],
    [0.0000000167, 2.51954641624, 976.7360250957],
    [0.00000001823, 1.60093991502, 1141.1340634054],
    [0.00000001564, 3.94804398924, 9566.2747128962],
    [0.00000001406, 3.65940442223, 316.5037442412],
    [0.00000001653, 3.62394476466, 968.1380053866],
    [0.00000001495, 0.7783227917, 5959.570433334],
    [0.00000001408, 5.2497092498, 316.279995072],
    [0.00000001724, 0.25483952164, 125.1841747464],
    [0.00000001426, 2.26871672572, 17.4084877393],
    [0.00000001881, 4.12588105003, 562.1467423301],
    [0.0000000137, 4.7447486688, 1357.6145525811],
    [0.00000001485, 2.18712736768, 9889.7801295536],
    [0.00000001369, 1.31846306523, 1160.8301730051],
    [0.00000001394, 5.6692451786, 1736.9915610157],
    [0.00000001375, 0.16983286236, 346.3999663373],
    [0.00000001525, 2.40244831911, 419.4364597654],
    [0.00000001359, 2.68668516027, 310.7627953641],
    [0.00000001396, 3.6705539794, 253.4591205053],
    [0.00000001454, 5.4935626244, 504.561183181],
    [0.00000001813, 0.2188206686, 263.7016716171],
    [0.0000000133, 3.01736059716, 254.1404440615],
    [0.00000001498, 0.17578085903, 155.7829722581],
    [0.00000001509, 5.13129901759, 768.8535556291],
    [0.0000000155, 1.44225397189, 1894.4190646765],
    [0.00000001447, 1.44933809994, 893.3564068193],
    [0.00000001306, 5.76425101758, 714.6788848813],
    [0.0000000166, 1.34160526151, 322.6116447801],
    [0.00000001347, 3.00388920953, 843.6351541964],
    [0.00000001432, 3.43786149731, 251.1714986449],
    [0.0000000151, 4.39762427873, 25.2727942655],
    [0.00000001587, 5.17106904014, 141.6988906084],
    [0.00000001477, 5.4751837761, 226.0417167313],
    [0.00000001356, 4.24406292182, 332.1728723357],
    [0.00000001644, 1.74367211793, 67.8804998876],
    [0.00000001407, 5.79229630947, 188.1693135244],
    [0.00000001575, 0.09808372057, 702.1487119091],
    [0.00000001765, 4.93410889383, 201.5196819912],
    [0.00000001318, 4.91605557404, 17.5261078183],
    [0.00000001701, 4.47360878108, 384.2723695442],
    [0.00000001304, 6.04155032791, 25.8634950965],
    [0.00000001269, 4.91035989349, 354.9979860464],
    [0.0000000162, 5.54960841244, 260.360219185],
    [0.00000001263, 1.16521999431, 255.8373650909],
    [0.00000001744, 3.70453251764, 147.1155165798],
    [0.00000001579, 4.31561365365, 2228.9701815978],
    [0.00000001557, 0.57740217353, 3178.1457905676],
    [0.00000001302, 0.32055726013, 119.767548775],
    [0.00000001405, 3.2040748604, 395.105621487],
    [0.00000001234, 2.34766954239, 318.679491517],
    [0.00000001519, 4.74629629688, 100.1720129118],
    [0.00000001573, 4.00132484524, 1264.2954542392],
    [0.00000001222, 0.10709243166, 1372.5924061081],
    [0.00000001205, 0.24105241435, 466.7582159433],
    [0.00000001188, 1.27112537278, 1184.4060462412],
    [0.0000000128, 4.85454052139, 535.9107402181],
    [0.00000001482, 4.4716669291, 763.4369296577],
    [0.00000001233, 1.64803509193, 433.663553767],
    [0.00000001476, 3.7663439911, 272.5815756165],
    [0.00000001199, 1.78020373551, 102.3420146932],
    [0.00000001186, 4.72162748523, 795.6802585721],
    [0.00000001291, 4.42697938285, 10220.3990932118],
    [0.00000001576, 2.40263038916, 348.635198571],
    [0.00000001497, 3.44614317326, 3024.2205570432],
    [0.00000001175, 4.85145058205, 433.7599219866],
    [0.00000001262, 5.79416346069, 531.978586955],
    [0.00000001486, 4.39599352105, 1055.4497769261],
    [0.00000001351, 0.46461977407, 707.5653378805],
    [0.0000000123, 5.18147817992, 752.3912293938],
    [0.00000001175, 4.35535063059, 3892.681663097],
    [0.00000001581, 5.49361132323, 419.532827985],
    [0.00000001247, 4.22328749428, 113.1270825262],
    [0.00000001145, 2.26067253357, 199.1201855462],
    [0.00000001385, 0.89711064123, 6073.7089078165],
    [0.00000001228, 4.55057016747, 680.0573113813],
    [0.0000000147, 1.58708185256, 409.1897031367],
    [0.00000001366, 3.99684537321, 6065.8446012903],
    [0.00000001131, 1.56474593118, 196.8367692027],
    [0.00000001163, 5.75528918663, 2303.6087678132],
    [0.00000001142, 4.35845106342, 1834.6153196362],
    [0.00000001244, 1.93187654929, 623.2225117576],
    [0.00000001136, 3.13253323524, 611.4430983108],
    [0.00000001425, 2.65840274172, 1253.7710188371],
    [0.00000001114, 3.43048279234, 771.3012361839],
    [0.00000001314, 0.15326588489, 493.303034596],
    [0.00000001109, 2.9580840286, 1091.6252591036],
    [0.00000001177, 3.88159541809, 128.3655684841],
    [0.0000000115, 4.6914056969, 1.2720243872],
    [0.00000001527, 1.09983755253, 683.0262567979],
    [0.00000001304, 5.24544813643, 5650.2921106782],
    [0.00000001347, 4.11616699496, 97.4636999261],
    [0.00000001085, 0.70231952018, 1166.4068576709],
    [0.00000001224, 4.2299482253, 827.1728279611],
    [0.00000001142, 5.36157631813, 199.0238173266],
    [0.00000001373, 0.89371361814, 799.6124118352],
    [0.00000001085, 1.15969472512, 398.2870152247],
    [0.00000001098, 3.75659421786, 318.3976072267],
    [0.00000001136, 1.35127769399, 205.9249160063],
    [0.00000001108, 6.03201954623, 206.4461808681],
    [0.00000001146, 0.18236094571, 6386.16862421],
    [0.00000001216, 0.49809632153, 1178.9894202698],
    [0.00000001295, 2.32056477953, 10003.9186040361],
    [0.00000001082, 1.966110692, 3700.7232086614],
    [0.00000001094, 5.12244388591, 314.3861320865],
    [0.00000001464, 4.54056066665, 1248.1419445446],
    [0.00000001277, 5.42029902662, 9996.0542975099],
    [0.00000001248, 0.21625135029, 101.6083015103],
    [0.00000001055, 5.5372537326, 1578.7779545453],
    [0.00000001265, 5.85587479852, 82.8583534146],
    [0.00000001058, 0.73824266822, 670.916774951],
    [0.00000001127, 3.6345849801, 582.3811631341],
    [0.00000001188, 2.10062104535, 423.8898778903],
    [0.00000001217, 2.49656109071, 311.7260032106],
    [0.0000000108, 3.96349373526, 118.8737768977],
    [0.00000001175, 0.91096377814, 740.0692992258],
    [0.00000001087, 5.46774426742, 494.4786907636],
    [0.0000000108, 3.49168860514, 847.0460425977],
    [0.00000001095, 0.97418295319, 1159.2933106701],
    [0.00000001078, 1.75579678521, 1457.525933062],
    [0.00000001087, 4.81206824168, 109.6850563576],
    [0.00000001293, 0.02397468965, 2723.0934116884],
    [0.0000000119, 4.49552956868, 429.3065038617],
    [0.00000001127, 0.84707518843, 48.7580447764],
    [0.00000001047, 4.58416926615, 89.7594520943],
    [0.00000001251, 1.16783030789, 455.1699989582],
    [0.00000001122, 5.7216130664, 78263.70942472259],
    [0.00000001027, 0.16330222064, 229.7614216733],
    [0.00000001069, 2.37188773221, 848.530515306],
    [0.00000001252, 5.28238896229, 6080.8224548173],
    [0.00000001181, 5.22299379363, 1459.9565672743],
    [0.00000001382, 0.51603096285, 774.0095491696],
    [0.00000001064, 5.95222326171, 1144.3154571431],
    [0.00000001083, 5.04862249728, 629.8629780064],
    [0.00000001061, 3.38604454777, 27.0873353739],
    [0.00000001415, 4.85796248007, 2332.0629558164],
    [0.00000001082, 4.07686503205, 1245.172999128],
    [0.00000001112, 6.07617329506, 870.4618571394],
    [0.00000001072, 0.73647405514, 1482.7987273275],
    [0.00000001322, 2.81015928946, 223.3334037456],
    [0.00000001398, 1.55232715558, 25771.5112719176],
    [0.00000001065, 3.98884050015, 683.1863154923],
    [0.00000001008, 5.19594380826, 316.1312372257],
    [0.00000001197, 0.79148395839, 9580.5018068978],
    [0.00000001402, 4.82957073563, 883.7951792637],
    [0.00000001064, 4.65334775068, 201.9927627432],
    [0.00000001108, 5.88857586823, 657.1627617014],
    [0.00000000996, 4.99081076034, 426.7582495704],
    [0.00000000996, 1.60533807224, 426.4381321816],
    [0.00000001028, 5.9212831945, 108.50940019],
    [0.00000001004, 3.5425959786, 754.0357607965],
    [0.00000001214, 0.81213286478, 1773.9178027186],
    [0.00000001318, 0.6026917613, 1123.1178284926],
    [0.00000001327, 4.758850089, 321.808495628],
    [0.00000001014, 5.79119811472, 6460.8122109608],
    [0.00000001178, 0.47169015111, 495.9631634719],
    [0.00000000999, 5.95030119388, 3906.9087570986],
    [0.00000001033, 3.75433174131, 414.8187774292],
    [0.00000001002, 1.39171012432, 1251.3403846248],
    [0.0000000099, 1.32621236288, 1268.7488723641],
    [0.00000001275, 1.95417923977, 757.8078553652],
    [0.00000001174, 6.04352585298, 225.0785088848],
    [0.00000001174, 5.43253033568, 849.2642284889],
    [0.00000001004, 5.33434806968, 46.2097904851],
    [0.00000001108, 1.28177889943, 294.3004691288],
    [0.00000000976, 1.83523959034, 5.8897067234],
    [0.00000000971, 3.38563950019, 306.0969289181],
    [0.0000000105, 3.88449467091, 632.2624744514],
    [0.0000000105, 3.26096036982, 159.7151255212],
    [0.00000001041, 2.36429894351, 821.5437536686],
    [0.00000001218, 4.61739999906, 990.2294059144],
    [0.00000001342, 1.55614528399, 498.9321088885],
    [0.00000000967, 3.84645372731, 604.4725636619],
    [0.00000001171, 0.42265751679, 10011.0321510369],
    [0.00000000965, 0.05396772193, 962.5089310941],
    [0.00000001096, 3.04685199735, 608.404716925],
    [0.00000001166, 6.14999706886, 737.3128021303],
    [0.00000000986, 3.71830385737, 1235.6117715724],
    [0.00000000953, 0.79704964354, 16.4623262353],
    [0.00000000976, 1.05304205075, 8.3373872782],
    [0.00000001142, 1.06057209808, 369.9758395734],
    [0.0000000106, 4.36236322604, 633.305004175],
    [0.00000001138, 4.31859245106, 98.4269077726],
    [0.00000001006, 5.89037944896, 10007.0999977738],
    [0.00000000967, 1.56852913547, 157.6399519819],
    [0.00000001082, 0.99548769517, 4.1446015842],
    [0.00000001009, 6.15037679495, 401.3253966105],
    [0.00000000981, 2.37620383333, 35.212274331],
    [0.00000001011, 5.42685471402, 110.7275860812],
    [0.00000000989, 4.11575312649, 413.8555695827],
    [0.00000001024, 1.90798238649, 1175.8080265321],
    [0.00000001079, 4.95981991427, 631.8205314667],
    [0.00000000982, 3.02842195594, 347.4113582936],
    [0.00000000979, 3.74615289445, 700.4517908797],
    [0.00000000928, 5.22236951137, 1173.5204046717],
    [0.00000000912, 4.14451390992, 469.7271613599],
    [0.00000000938, 1.18273838991, 254.3528923826],
    [0.00000000977, 1.26684849112, 104.5772469269],
    [0.00000001134, 5.87478488618, 6058.7310542895],
    [0.00000001092, 4.51789158271, 532.1386456494],
    [0.00000001132, 4.5542002715, 1912.5783119412],
    [0.00000000915, 4.87266214195, 18.9100067901],
    [0.00000000915, 5.96624579967, 1987.2168981566],
    [0.00000001039, 2.40020830681, 6475.0393049624],
    [0.00000000965, 4.98927479154, 394.3548619616],
    [0.00000000964, 3.609037159, 3281.2385647862],
    [0.00000000897, 2.81660605059, 316.2318109622],
    [0.00000001008, 5.78024010734, 502.8642621516],
    [0.00000001005, 6.12431717236, 6275.9623029906],
    [0.00000000895, 6.09245508513, 316.551928351],
    [0.00000001224, 1.73535287415, 5120.6011455836],
    [0.00000001138, 2.92901543353, 1037.2905296614],
    [0.00000000924, 5.70601816488, 614.8369403696],
    [0.00000000893, 5.25155704274, 475.3562356524],
    [0.00000001042, 1.10027795842, 1518.2234499796],
    [0.0000000089, 4.03192782386, 1314.3255234028],
    [0.00000000926, 3.35110915055, 635.70450062],
    [0.0000000113, 5.49282680494, 92.940845832],
    [0.0000000089, 2.12933822393, 3384.3313390048],
    [0.00000000967, 5.86215202069, 13.3333221243],
    [0.00000001004, 1.73116475997, 10316.3783204296],
    [0.00000001226, 3.52834223937, 80.4106728598],
    [0.00000001029, 4.90620832171, 19.1224551112],
    [0.00000000996, 0.76740358631, 733.428832977],
    [0.0000000091, 4.08904906301, 3333.498879699],
    [0.00000001235, 1.23871819142, 357.2332182801],
    [0.00000001218, 0.18349810348, 1090.4014188262],
    [0.00000000864, 4.71917415767, 620.253566341],
    [0.00000000935, 1.45887009044, 1042.9196039539],
    [0.00000000866, 4.04792682992, 522.529233984],
    [0.00000001158, 5.4332220911, 1089.129394439],
    [0.0000000086, 0.49220052417, 64.9597385808],
    [0.0000000119, 5.5896536965, 2810.9214616052],
    [0.00000000957, 3.1291404701, 628.5909536192],
    [0.00000000861, 5.69790389801, 103.843533744],
    [0.00000001037, 5.91424823262, 11.3063326948],
    [0.00000000918, 0.21424702155, 373.0142209592],
    [0.00000000836, 3.02501867546, 387.2413149608],
    [0.00000001158, 3.33343863758, 6290.1893969922],
    [0.00000000856, 0.81593288669, 907.3710524998],
    [0.00000001036, 3.11936047271, 5429.8794682394],
    [0.00000000853, 6.23618175592, 938.8806682313],
    [0.00000000982, 3.39082880963, 521.6142102473],
    [0.00000000851, 5.14029961564, 802.7938055729],
    [0.00000000828, 0.28399876908, 338.4832701844],
    [0.00000000868, 1.89151676387, 627.1546650207],
    [0.00000000878, 2.67671626912, 688.6553310904],
    [0.00000000921, 0.18441593712, 3803.81598288],
    [0.00000000821, 0.74694467095, 1152.1797636693],
    [0.00000000841, 2.42616504698, 625.8826406335],
    [0.00000000862, 3.35273419872, 425.3261664888],
    [0.00000000887, 3.46938383985, 1748.788020805],
    [0.00000000815, 5.95428642326, 321.0577361026],
    [0.00000000958, 1.35525670354, 1201.831580323],
    [0.00000000905, 5.43093361027, 236.8749686741],
    [0.00000000862, 3.24167644516, 427.8702152632],
    [0.00000000793, 5.01131700831, 109.9938728983],
    [0.00000000791, 2.21809404489, 110.4187695405],
    [0.00000000842, 5.04957483651, 444.1242986943],
    [0.00000000887, 4.23752031714, 3553.9115221378],
    [0.00000000851, 4.64229745145, 4105.980758535],
    [0.00000001067, 4.69271921916, 559.6990617753],
    [0.00000000966, 4.55013458162, 9360.089164459],
    [0.00000000977, 1.50925667031, 186.472392495],
    [0.00000001092, 0.5815374794, 203.2647871304],
    [0.00000000997, 0.24589891452, 439.9315130003],
    [0.00000000786, 3.84829878956, 194.3890886479],
    [0.00000000774, 3.7605063931, 219.1406180516],
    [0.00000000845, 4.21602090805, 2648.454825473],
    [0.00000000962, 0.30590569897, 229.340730548],
    [0.00000000763, 0.05577842075, 846.131018861],
    [0.00000000839, 5.68124142701, 2620.0006374698],
    [0.00000000818, 2.5260962654, 26301.2022370122],
    [0.00000000929, 0.71906225883, 740.2817475469],
    [0.00000000895, 5.83218231202, 4539.6924964118],
    [0.00000000939, 3.68460642343, 817.7716590999],
    [0.00000000755, 4.90024080821, 532.8723588323],
    [0.00000000784, 1.14096100609, 551.031606097],
    [0.00000000899, 1.85252071775, 835.7878940127],
    [0.00000000753, 0.04254534997, 1534.7381658416],
    [0.00000001033, 1.0013799327, 134.1122628556],
    [0.00000000851, 6.1227286454, 1475.6851803267],
    [0.00000000797, 5.14322789256, 473.659314623],
    [0.00000000729, 4.94931618796, 476.1069951778],
    [0.00000000852, 3.11058720799, 232.4215505492],
    [0.00000000783, 4.50805467439, 1151.4290041439],
    [0.00000000751, 0.92289775523, 1884.124123938],
    [0.00000000832, 4.19686348297, 29.2049475286],
    [0.0000000072, 0.4096104103, 522.6256022036],
    [0.00000000722, 3.96121088528, 1474.9344208013],
    [0.00000000788, 0.99170388242, 121.8427223143],
    [0.00000000722, 4.16734185316, 232.2091022281],
    [0.0000000097, 2.32204039048, 566.600160455],
    [0.00000000814, 5.19337022083, 948.2124011233],
    [0.00000000724, 2.30837674225, 949.12742486],
    [0.0000000077, 5.89605163084, 156.6767441354],
    [0.00000000705, 5.40102118863, 1193.9672737968],
    [0.00000000809, 3.56474059969, 845.3320752258],
    [0.00000000755, 3.94580797273, 451.7279727896],
    [0.00000000731, 6.11847213487, 1239.5439248355],
    [0.00000000747, 1.40599730465, 782.3469364478],
    [0.00000000861, 1.84312374221, 984.6003316219],
    [0.00000000695, 4.78088165969, 10419.4710946482],
    [0.00000000804, 1.079984374, 89.0086925689],
    [0.00000000828, 5.86080569334, 845.1196269047],
    [0.00000000692, 3.38736418117, 6489.2613984286],
    [0.00000000694, 3.07863807714, 316.6043179777],
    [0.0000000069, 5.8668131138, 316.1794213355],
    [0.00000000714, 5.38707933404, 567.8240007324],
    [0.00000000767, 0.1208184965, 485.8806710545],
    [0.0000000082, 1.87877245664, 499.895316735],
    [0.00000000705, 0.57839934869, 1053.7528558967],
    [0.00000000684, 4.8844227063, 2545.3620512544],
    [0.00000000689, 6.14296395253, 622.4887985747],
    [0.00000000823, 3.50224755884, 877.5754041402],
    [0.00000000827, 2.59300433753, 232.942815411],
    [0.00000000735, 3.05650026582, 66.9172920411],
];

const R1: &[Term] = &[
    [0.06182981282, 0.25843515034, 213.299095438],
    [0.00506577574, 0.71114650941, 206.1855484372],
    [0.00341394136, 5.7963577396, 426.598190876],
    [0.00188491375, 0.47215719444, 220.4126424388],
    [0.0018626154, PI, 0.0],
    [0.00143891176, 1.40744864239, 7.1135470008],
    [0.00049621111, 6.0174446958, 103.0927742186],
    [0.00020928189, 5.0924565447, 639.897286314],
    [0.00019952612, 1.17560125007, 419.4846438752],
    [0.00018839639, 1.60819563173, 110.2063212194],
    [0.00012892827, 5.94330258435, 433.7117378768],
    [0.00013876565, 0.75886204364, 199.0720014364],
    [0.00005396699, 1.28852405908, 14.2270940016],
    [0.00004869308, 0.86793894213, 323.5054166574],
    [0.00004247455, 0.39299384543, 227.5261894396],
    [0.00003252084, 1.25853470491, 95.9792272178],
    [0.00002856006, 2.16731405366, 735.8765135318],
    [0.00002909411, 4.60679154788, 202.2533951741],
    [0.00003081408, 3.43662557418, 522.5774180938],
    [0.00001987689, 2.45054204795, 412.3710968744],
    [0.00001941309, 6.02393385142, 209.3669421749],
    [0.00001581446, 1.29191789712, 210.1177017003],
    [0.00001339511, 4.30801821806, 853.196381752],
    [0.0000131559, 1.25296446023, 117.3198682202],
    [0.00001203085, 1.86654673794, 316.3918696566],
    [0.00001091088, 0.07527246854, 216.4804891757],
    [0.00000954403, 5.15173410519, 647.0108333148],
    [0.00000966012, 0.47991379141, 632.7837393132],
    [0.00000881827, 1.88471724478, 1052.2683831884],
    [0.00000874215, 1.40224683864, 224.3447957019],
    [0.00000897512, 0.98343776092, 529.6909650946],
    [0.00000784866, 3.06377517461, 838.9692877504],
    [0.00000739892, 1.38225356694, 625.6701923124],
    [0.00000612961, 3.03307306767, 63.7358983034],
    [0.0000065821, 4.1436293098, 309.2783226558],
    [0.000006496, 1.7248948616, 742.9900605326],
    [0.00000599236, 2.54924174765, 217.2312487011],
    [0.00000502886, 2.12958819475, 3.9321532631],
    [0.00000413017, 4.59334402271, 415.5524906121],
    [0.00000356117, 2.30312127651, 728.762966531],
    [0.00000344777, 5.88787577835, 440.8252848776],
    [0.00000395004, 0.53349091102, 956.2891559706],
    [0.00000335526, 1.61614647174, 1368.660252845],
    [0.00000362772, 4.70691652867, 302.164775655],
    [0.00000321611, 0.97931764923, 3.1813937377],
    [0.00000277783, 0.26007031431, 195.1398481733],
    [0.00000291173, 2.83129427918, 1155.361157407],
    [0.00000264971, 2.42670902733, 88.865680217],
    [0.00000264864, 5.82860588985, 149.5631971346],
    [0.00000316777, 3.58395655749, 515.463871093],
    [0.00000294324, 2.81632778983, 11.0457002639],
    [0.00000244864, 1.04493438899, 942.062061969],
    [0.00000215368, 3.56535574833, 490.3340891794],
    [0.00000264047, 1.28547685567, 1059.3819301892],
    [0.00000246245, 0.90730313861, 191.9584544356],
    [0.00000222077, 5.1319321205, 269.9214467406],
    [0.00000194973, 4.56665009915, 846.0828347512],
    [0.00000182802, 2.67913220473, 127.4717966068],
    [0.00000181645, 4.93431600689, 74.7815985673],
    [0.00000174651, 3.44560172182, 137.0330241624],
    [0.00000165515, 5.99775895715, 536.8045120954],
    [0.00000154809, 1.19720845085, 265.9892934775],
    [0.00000169743, 4.63464467495, 284.1485407422],
    [0.00000151526, 0.52928231044, 330.6189636582],
    [0.00000152461, 5.43886711695, 422.6660376129],
    [0.00000157687, 2.99559914619, 340.7708920448],
    [0.0000014063, 2.02069760726, 1045.1548361876],
    [0.00000139834, 1.3528295939, 1685.0521225016],
    [0.00000140977, 1.27099900689, 203.0041546995],
    [0.00000136013, 5.01678984678, 351.8165923087],
    [0.00000153391, 0.26968607873, 1272.6810256272],
    [0.00000129476, 1.14344730612, 21.3406410024],
    [0.00000127831, 2.53876158952, 1471.7530270636],
    [0.00000126538, 3.00310970076, 277.0349937414],
    [0.00000100277, 3.61360169153, 1066.49547719],
    [0.00000103169, 0.38175114761, 203.7378678824],
    [0.00000107527, 4.31870663477, 210.8514148832],
    [0.00000095934, 0.79463744168, 1258.4539316256],
    [0.00000082663, 0.28181414606, 234.6397364404],
    [0.00000097986, 2.56085956186, 191.2076949102],
    [0.00000097389, 3.26245865063, 831.8557407496],
    [0.00000072227, 4.3798463038, 860.3099287528],
    [0.00000070639, 0.7319151392, 437.6438911399],
    [0.00000070447, 0.87698401733, 423.4167971383],
    [0.00000072057, 5.58013290518, 429.7795846137],
    [0.00000073332, 0.62505906432, 1375.7737998458],
    [0.00000066433, 2.68414462465, 405.2575498736],
    [0.00000063812, 1.7505149818, 1361.5467058442],
    [0.00000061601, 1.09332288242, 2001.4439921582],
    [0.00000067006, 0.06872766216, 408.4389436113],
    [0.00000068945, 2.47127505057, 949.1756089698],
    [0.00000060456, 2.25094790113, 1788.1448967202],
    [0.00000067074, 5.45365870159, 200.7689224658],
    [0.00000065579, 0.05539079332, 1589.0728952838],
    [0.0000004932, 4.17243429807, 138.5174968707],
    [0.00000050648, 6.26867505289, 223.5940361765],
    [0.00000055166, 4.59491533823, 628.8515860501],
    [0.00000047916, 0.83929741626, 10.2949407385],
    [0.00000046691, 2.17322569098, 312.1990839626],
    [0.00000054179, 0.28360076018, 124.433415221],
    [0.00000049511, 3.79960349195, 215.7467759928],
    [0.00000040136, 5.18161452756, 1478.8665740644],
    [0.00000039302, 0.56257369109, 1574.8458012822],
    [0.00000034962, 4.68487505703, 38.1330356378],
    [0.0000004277, 2.98582069454, 1148.2476104062],
    [0.00000036521, 0.63453270366, 52.6901980395],
    [0.00000039752, 0.28412706854, 131.4039498699],
    [0.00000031777, 5.19036499973, 76.2660712756],
    [0.00000033041, 1.9796484643, 142.4496501338],
    [0.00000042053, 4.830179518, 288.0806940053],
    [0.00000030757, 1.47903923433, 1677.9385755008],
    [0.00000042829, 3.38225543528, 208.633228992],
    [0.00000029245, 5.09869866956, 654.1243803156],
    [0.00000029165, 4.95664881649, 1795.258443721],
    [0.00000029136, 2.74747553685, 404.5067903482],
    [0.00000032689, 6.12099521344, 145.6310438715],
    [0.00000028008, 0.83185907283, 2317.8358618148],
    [0.00000027725, 2.24364073545, 430.5303441391],
    [0.00000029939, 1.96415498448, 2104.5367663768],
    [0.00000032982, 3.28236160491, 222.8603229936],
    [0.00000031772, 6.02453027348, 1905.4647649404],
    [0.00000026959, 5.24308283338, 388.4651552382],
    [0.00000026514, 0.99638302878, 107.0249274817],
    [0.00000025421, 2.87336642463, 703.6331846174],
    [0.00000024908, 1.07713811775, 99.9113804809],
    [0.00000024955, 6.23974037842, 106.2741679563],
    [0.00000024894, 0.81040976807, 312.4597163935],
    [0.0000002434, 0.54867402916, 214.2623032845],
    [0.00000028441, 0.82630052794, 1692.1656695024],
    [0.00000023219, 5.07995629354, 479.2883889155],
    [0.00000024362, 3.10643455533, 212.3358875915],
    [0.00000021951, 6.06688237952, 85.8272988312],
    [0.00000022046, 3.89863665506, 563.6312150384],
    [0.00000022596, 4.86725457223, 295.0512286542],
    [0.00000021256, 5.10797617452, 333.657345044],
    [0.00000025985, 2.20813879137, 1265.5674786264],
    [0.00000020904, 3.28855303434, 70.8494453042],
    [0.00000021505, 3.79541155976, 347.8844390456],
    [0.00000022067, 4.22716352578, 217.964961884],
    [0.00000020629, 1.68732248608, 231.4583427027],
    [0.00000021429, 3.08914428467, 554.0699874828],
    [0.0000002131, 0.38868340861, 319.5732633943],
    [0.00000020521, 2.45651851283, 18.1592472647],
    [0.00000026055, 4.27554951169, 483.2205421786],
    [0.00000020703, 5.1205793632, 362.8622925726],
    [0.00000022047, 5.51249354809, 343.2185725996],
    [0.00000019443, 2.02441679295, 313.2104759189],
    [0.00000020163, 5.0848137311, 750.1036075334],
    [0.00000020125, 3.42997916125, 213.3472795478],
    [0.00000024196, 0.64787472796, 207.8824694666],
    [0.00000021977, 0.72894956852, 99.1606209555],
    [0.0000002112, 2.69286728009, 1464.6394800628],
    [0.00000017192, 4.71525117969, 2111.6503133776],
    [0.0000001854, 0.04817255506, 245.5424243524],
    [0.00000017521, 3.83662880684, 497.4476361802],
    [0.00000016107, 4.22374822303, 565.1156877467],
    [0.00000021607, 4.16647257628, 2.4476805548],
    [0.00000015979, 0.27376396113, 225.8292684102],
    [0.00000016831, 1.41134653939, 114.1384744825],
    [0.00000015626, 2.82768623405, 81.7521332162],
    [0.00000015499, 1.20606390539, 1994.3304451574],
    [0.00000015168, 3.84591816174, 1162.4747044078],
    [0.00000016436, 3.04752365976, 134.5853436076],
    [0.0000001587, 0.33026420429, 1891.2376709388],
    [0.0000002037, 0.23170286692, 213.2509113282],
    [0.00000016291, 1.70643197929, 2420.9286360334],
    [0.0000001628, 4.9415942732, 357.4456666012],
    [0.00000018076, 5.69515344123, 56.6223513026],
    [0.00000013724, 0.5724019003, 2634.2277314714],
    [0.00000017355, 3.55311137444, 218.9281697305],
    [0.0000001374, 5.70545527289, 92.0470739547],
    [0.00000015328, 1.3133869285, 216.2198567448],
    [0.00000012538, 5.19222019427, 635.9651330509],
    [0.00000012815, 1.6015113087, 320.3240229197],
    [0.00000013043, 0.45068441373, 1169.5882514086],
    [0.00000011984, 5.9491612357, 543.9180590962],
    [0.00000011753, 2.80279347133, 217.491881132],
    [0.00000014746, 5.56520105813, 344.7030453079],
    [0.00000012762, 1.63557330778, 273.1028404783],
    [0.00000011855, 2.46234840263, 721.6494195302],
    [0.00000013309, 5.75641013916, 2221.856634597],
    [0.00000014471, 0.45316163629, 2008.557539159],
    [0.0000001184, 1.7572077238, 160.6088973985],
    [0.00000012374, 1.01456317602, 329.7251917809],
    [0.00000010747, 1.58065203003, 212.7778305762],
    [0.00000012758, 1.9195237324, 1581.959348283],
    [0.00000011944, 4.44720922423, 32.2433289144],
    [0.00000011865, 5.10696147162, 4.665866446],
    [0.00000011861, 4.30847607078, 618.5566453116],
    [0.00000010036, 0.48709852137, 305.3461693927],
    [0.00000012777, 3.74412991331, 508.3503240922],
    [0.00000010677, 0.76645916273, 218.7157214094],
    [0.00000011351, 3.00009819697, 198.321241911],
    [0.00000010249, 2.40923650192, 546.956440482],
    [0.00000009984, 2.63882014753, 416.3032501375],
    [0.00000009345, 5.4591731786, 414.0680179038],
    [0.00000009317, 4.46380159546, 2428.0421830342],
    [0.00000009928, 4.04821559448, 62.2514255951],
    [0.00000012767, 3.43273835457, 258.8757464767],
    [0.00000009733, 1.6106632468, 327.4375699205],
    [0.00000011163, 2.40665325234, 1781.0313497194],
    [0.00000010608, 2.0748002083, 213.8203602998],
    [0.00000009125, 2.92369523159, 1279.794572628],
    [0.00000009525, 1.10338403136, 113.3877149571],
    [0.00000009805, 3.28427768485, 275.5505210331],
    [0.00000011263, 1.89402915826, 561.1835344836],
    [0.00000008572, 2.17858055966, 425.1137181677],
    [0.00000008577, 1.95484887975, 35.4247226521],
    [0.00000010157, 0.09037368733, 182.279606801],
    [0.00000011807, 3.71278037583, 350.3321196004],
    [0.00000008595, 1.83382454431, 629.6023455755],
    [0.00000008396, 3.76782674303, 251.4321310758],
    [0.0000000846, 0.35676476459, 617.8058857862],
    [0.0000000825, 5.31140994372, 65.2203710117],
    [0.00000008342, 1.3830766388, 1.4844727083],
    [0.00000007987, 5.1362289817, 22.0914005278],
    [0.00000008377, 0.91817077859, 1485.9801210652],
    [0.0000000798, 0.94199750915, 2310.722314814],
    [0.00000008898, 0.54037636841, 168.0525127994],
    [0.00000008233, 3.45785310349, 424.1505103212],
    [0.00000008034, 3.38451795597, 144.1465711632],
    [0.00000007871, 5.14041888473, 358.9301393095],
    [0.00000008868, 6.13541788772, 621.7380390493],
    [0.00000007523, 5.75475671698, 447.9388318784],
    [0.00000007515, 2.18967849979, 264.5048207692],
    [0.00000008083, 1.42661116937, 2737.32050569],
    [0.00000008199, 0.96419579079, 767.3690829208],
    [0.00000008232, 0.35471613534, 278.5194664497],
    [0.00000008226, 5.44467204721, 254.9435932136],
    [0.00000006779, 1.19567671732, 5.4166259714],
    [0.00000008928, 4.88240256153, 120.358249606],
    [0.00000007845, 4.56376829397, 280.9671470045],
    [0.00000006566, 3.50152072308, 9.5612275556],
    [0.00000006398, 0.33471834269, 2950.619601128],
    [0.00000006881, 3.39438820076, 98.8999885246],
    [0.00000007418, 4.52451404934, 5.6290742925],
    [0.00000008021, 0.94470052446, 636.7158925763],
    [0.00000006134, 0.18013315689, 2207.6295405954],
    [0.00000007153, 3.85218295688, 214.0498549634],
    [0.00000006046, 4.66733263196, 543.0242872189],
    [0.00000006365, 2.12000811873, 274.0660483248],
    [0.00000006481, 5.31032923608, 6076.8903015542],
    [0.00000005935, 6.16808119163, 650.9429865779],
    [0.00000005752, 3.55773840903, 1073.6090241908],
    [0.00000006438, 0.44934410249, 10007.0999977738],
    [0.00000006283, 3.20942251433, 219.4494345923],
    [0.00000005542, 3.61193204407, 125.9873238985],
    [0.00000005522, 3.84217355164, 181.0557665236],
    [0.00000005777, 3.00590926498, 121.2520214833],
    [0.0000000667, 1.65236689367, 1898.3512179396],
    [0.00000007591, 0.10483002359, 2324.9494088156],
    [0.00000005881, 1.04006410206, 9992.8729037722],
    [0.00000005609, 4.83142709229, 643.0786800517],
    [0.00000005569, 2.23863483508, 1038.0412891868],
    [0.00000005755, 5.91598458372, 6062.6632075526],
    [0.00000005845, 6.10234689502, 209.106309744],
    [0.00000005577, 0.81426649853, 472.1748419147],
    [0.00000005247, 0.56496127013, 192.6921676185],
    [0.00000005493, 5.81071309534, 237.6781178262],
    [0.00000005148, 4.85160826999, 267.4737661858],
    [0.00000006122, 2.11480301005, 2097.423219376],
    [0.00000006188, 4.59441762166, 207.6700211455],
    [0.00000006303, 0.75806431119, 210.3783341312],
    [0.00000005102, 4.01017179605, 205.2223405907],
    [0.00000006583, 1.79054357427, 12.5301729722],
    [0.00000004902, 0.8509952186, 247.2393453818],
    [0.00000004918, 4.03512681632, 487.3651437628],
    [0.00000005818, 5.48495503489, 2538.2485042536],
    [0.00000004855, 4.18197778083, 2744.4340526908],
    [0.00000004885, 0.25103933716, 129.9194771616],
    [0.00000005748, 0.55968589618, 116.4260963429],
    [0.00000004901, 4.48628916012, 291.262087743],
    [0.0000000472, 5.57686152365, 342.2553647531],
    [0.00000005962, 5.12885837444, 692.5874843535],
    [0.00000005629, 4.39847572369, 196.6243208816],
    [0.00000005596, 0.94874135403, 1802.3719907218],
    [0.00000006197, 3.80364010966, 339.2864193365],
    [0.00000004668, 3.16816375033, 148.0787244263],
    [0.00000004891, 2.67234862638, 417.0369633204],
    [0.00000004959, 1.63453587065, 166.828672522],
    [0.00000004408, 4.95179678525, 184.0941479094],
    [0.00000004449, 5.69134789394, 252.6559713532],
    [0.00000004943, 0.85358212806, 46.470422916],
    [0.00000005153, 3.82176885491, 842.1506814881],
    [0.0000000593, 5.95484153666, 486.4019359163],
    [0.00000004206, 2.97664198894, 380.12776796],
    [0.00000004467, 0.249149784, 128.9562693151],
    [0.00000005419, 6.19106890918, 337.732510659],
    [0.00000004499, 4.71434958315, 151.0476698429],
    [0.00000004233, 4.18702525973, 685.4739373527],
    [0.00000004695, 1.54881559549, 214.7835681463],
    [0.00000004084, 4.871732264, 14.977853527],
    [0.00000004321, 5.4261516886, 436.8931316145],
    [0.00000005145, 0.49931857511, 248.7238180901],
    [0.00000003897, 0.74661138504, 2627.1141844706],
    [0.00000003995, 3.07750371135, 710.7467316182],
    [0.00000004089, 5.81996977038, 491.8185618877],
    [0.00000004532, 3.67494714028, 189.7232222019],
    [0.0000000369, 1.26565281569, 211.8146227297],
    [0.00000004036, 1.15473702593, 3053.7123753466],
    [0.00000003672, 4.52661018437, 488.8496164711],
    [0.00000003662, 2.87243745783, 411.620337349],
    [0.00000003653, 3.06205147988, 409.9234163196],
    [0.00000003908, 3.45947158106, 220.4608265486],
    [0.00000004989, 3.36376245705, 824.7421937488],
    [0.00000003677, 3.55713278092, 244.318584075],
    [0.0000000358, 1.57825591891, 643.8294395771],
    [0.00000003546, 2.1984624503, 135.336103133],
    [0.0000000356, 4.51362022045, 601.7642506762],
    [0.00000003843, 0.98567531677, 271.4059194489],
    [0.00000003559, 1.11005765159, 6283.0758499914],
    [0.00000004266, 6.19696005871, 268.4369740323],
    [0.00000003442, 4.27628882392, 867.4234757536],
    [0.00000004844, 3.73706907228, 235.3904959658],
    [0.00000003659, 2.21859531609, 2.9207613068],
    [0.00000003958, 5.17084570945, 114.3991069134],
    [0.00000003609, 5.54387488088, 458.8415197904],
    [0.0000000447, 3.742569309, 699.7010313543],
    [0.00000003293, 4.48068043469, 289.5651667136],
    [0.0000000324, 5.94728881707, 131.5469622218],
    [0.00000003477, 3.54553285172, 963.4027029714],
    [0.00000003838, 4.77967877681, 175.1660598002],
    [0.00000003223, 1.95410765469, 212.0270710508],
    [0.00000004053, 4.19011281964, 501.3797894433],
    [0.000000031, 2.11956558345, 916.9322800554],
    [0.00000003183, 1.93201605379, 1354.4331588434],
    [0.00000003301, 1.80825506815, 756.3233826569],
    [0.00000004187, 5.96622666047, 212.5483359126],
    [0.00000003716, 3.70660462807, 204.7010757289],
    [0.00000003, 6.15443664698, 3267.0114707846],
    [0.00000002993, 4.20888489881, 533.6231183577],
    [0.00000004125, 6.09715151219, 2641.3412784722],
    [0.00000003145, 2.55483540896, 905.8865797915],
    [0.00000002982, 1.52760656472, 945.9942152321],
    [0.00000003015, 1.76012152992, 28.3111756513],
    [0.00000003453, 1.42473508236, 2214.7430875962],
    [0.00000002926, 5.50138147476, 24.3790223882],
    [0.00000002978, 4.2744005991, 195.8906076987],
    [0.00000003526, 3.63935401565, 229.9738699944],
    [0.0000000286, 4.52551886503, 241.6102710893],
    [0.00000003059, 5.68165832697, 282.6640680339],
    [0.00000003415, 5.26311934884, 67.6680515665],
    [0.00000002819, 5.42053027567, 305.0855369618],
    [0.00000003503, 1.31670335802, 69.1525242748],
    [0.00000002746, 0.82597971627, 444.7574381407],
    [0.00000002796, 0.0702104716, 681.5417840896],
    [0.00000003366, 4.03843228994, 6.1503391543],
    [0.00000003242, 2.63461047831, 739.8086667949],
    [0.00000002718, 3.40899287465, 188.9200730498],
    [0.00000002741, 3.22092213412, 776.9303104764],
    [0.00000002793, 3.39766347322, 431.264057322],
    [0.00000002966, 3.9142937295, 526.5095713569],
    [0.00000002693, 3.38996413068, 778.4147831847],
    [0.0000000268, 3.82192393959, 3060.8259223474],
    [0.00000002954, 2.69669880207, 426.6463749858],
    [0.00000002681, 1.04615621583, 28.4541880032],
    [0.00000003182, 2.72333374876, 432.2272651685],
    [0.00000002633, 2.55029306465, 10213.285546211],
    [0.00000002923, 0.85695094024, 2435.155730035],
    [0.00000002596, 5.42890752137, 207.1487562837],
    [0.00000003225, 0.9653861573, 2118.7638603784],
    [0.00000002774, 0.3326084427, 326.6868103951],
    [0.0000000255, 5.88893697427, 439.1283638482],
    [0.00000002716, 3.15505406487, 170.7608257851],
    [0.00000002942, 4.88555233562, 397.3932433474],
    [0.00000003121, 1.87815629157, 2413.8150890326],
    [0.00000003263, 2.59868619716, 213.0384630071],
    [0.00000002518, 0.15471130491, 945.2434557067],
    [0.00000003169, 5.70993651497, 381.3516082374],
    [0.00000002515, 0.06248441393, 427.5613987225],
    [0.00000003279, 4.95751323467, 313.9441891018],
    [0.00000002595, 5.13169797457, 299.1263942692],
    [0.00000002572, 3.42558391509, 4.192785694],
    [0.0000000258, 2.03280916494, 319.3126309634],
    [0.00000003294, 6.24566168486, 421.1815649046],
    [0.0000000258, 2.62721090534, 213.1872208534],
    [0.00000002879, 0.45679876898, 285.6330134505],
    [0.00000002406, 4.57473098758, 228.276948965],
    [0.00000002518, 2.5550008583, 140.001969579],
    [0.00000002422, 2.36310658303, 84.3428261229],
    [0.00000002374, 2.25544718932, 17.2654753874],
    [0.00000002627, 1.26370339212, 724.8308132679],
    [0.00000002346, 3.77641630157, 206.233732547],
    [0.00000002463, 5.4209427824, 395.578702239],
    [0.00000002352, 0.63041319237, 210.5907824523],
    [0.00000003166, 0.26273580642, 201.5196819912],
    [0.00000002405, 0.78919759458, 426.0769260142],
    [0.0000000239, 5.89523812458, 738.7972748386],
    [0.00000002515, 0.70044371265, 2943.5060541272],
    [0.00000002332, 4.06963624306, 519.3960243561],
    [0.00000003132, 2.7933163219, 732.6951197941],
    [0.00000002658, 3.34020209714, 1141.1340634054],
    [0.00000002258, 0.1240330973, 2524.021410252],
    [0.00000002697, 2.58404587754, 425.6349830295],
    [0.00000002416, 3.85003724506, 696.5196376166],
    [0.00000002597, 2.54164936697, 436.1594184316],
    [0.00000002192, 3.07202313269, 203.2647871304],
    [0.00000002424, 2.60715310452, 511.5317178299],
    [0.00000002126, 0.14811901148, 405.9912630565],
    [0.00000002306, 1.25068142377, 427.1194557378],
    [0.00000002121, 0.43505808954, 184.9879197867],
    [0.00000002755, 3.02380019321, 468.2426886516],
    [0.00000002333, 3.02634928771, 216.0074084237],
    [0.00000002182, 4.27912012069, 7.1617311106],
    [0.00000002101, 4.31781498012, 572.2292347475],
    [0.00000002362, 4.8291434111, 556.5176680376],
    [0.00000002218, 0.82936075453, 3370.1042450032],
    [0.00000002103, 5.25950154713, 661.2379273164],
    [0.0000000258, 1.0370534038, 213.4109700226],
    [0.00000002366, 6.14368355608, 205.4347889118],
    [0.00000002042, 0.21462094901, 3259.8979237838],
    [0.00000002547, 4.69969204009, 221.3758502853],
    [0.00000001987, 3.22670561632, 1382.8873468466],
    [0.00000002213, 0.89932827487, 286.596221297],
    [0.00000002191, 0.08759174058, 259.769518354],
    [0.00000001968, 0.57824086026, 180.1619946463],
    [0.00000002037, 2.35713099759, 610.6923387854],
    [0.00000001959, 2.18553775379, 72.0732855816],
    [0.00000002061, 1.68041202479, 1670.8250285],
    [0.0000000194, 0.62951066481, 406.954470903],
    [0.00000002043, 4.39130144045, 576.1613880106],
    [0.00000001936, 1.0528693453, 1262.3860848887],
    [0.00000001975, 0.3194583516, 938.1299087059],
    [0.00000002015, 1.66410213484, 193.655375465],
    [0.00000001971, 0.72639439054, 200.5564741447],
    [0.00000001952, 6.25320630177, 241.7532834412],
    [0.00000001976, 1.31263772699, 135.5485514541],
    [0.00000002448, 0.52850194172, 429.5189521828],
    [0.00000001977, 3.13944703383, 421.93232443],
    [0.00000001853, 0.17184530353, 196.0336200506],
    [0.00000002552, 5.39764879348, 2854.6403739102],
    [0.0000000183, 1.47821899466, 638.4128136057],
    [0.00000002245, 6.0042716427, 230.7075831773],
    [0.00000001822, 6.08626100417, 1261.6353253633],
    [0.00000002168, 0.41741136149, 213.5115437591],
    [0.00000001869, 3.67791368036, 403.0223176399],
    [0.00000001866, 1.59662677545, 391.1734682239],
    [0.00000002034, 1.21814866092, 3046.5988283458],
    [0.00000001929, 4.93193335031, 420.9691165835],
    [0.00000001746, 5.09757251683, 107.7586406646],
    [0.00000002168, 3.24685294764, 213.0866471169],
    [0.00000002178, 5.09777299346, 558.0021407459],
    [0.00000001992, 2.29524873043, 1773.9178027186],
    [0.00000001761, 2.8865562467, 141.6988906084],
    [0.00000001769, 5.47051542758, 206.1373643274],
    [0.00000001734, 2.11941015901, 430.79097657],
    [0.00000002377, 1.0763352157, 59.8037450403],
    [0.00000001797, 2.90984583978, 92.7978334801],
    [0.00000001725, 5.22827286197, 757.2171545342],
    [0.00000002305, 5.88235807192, 426.5500067662],
    [0.00000001751, 5.2899080347, 87.3117715395],
    [0.00000002202, 1.28096946505, 624.919432787],
    [0.00000002043, 0.46193065602, 831.1049812242],
    [0.00000001931, 1.26974971942, 219.891377577],
    [0.00000001953, 2.96900002385, 398.1440028728],
    [0.00000001676, 4.81683149512, 181.806526049],
    [0.00000001902, 2.74426125465, 4952.0635932862],
    [0.00000002133, 5.37177705284, 627.3671133418],
    [0.00000001962, 3.52111949662, 213.4591541324],
    [0.00000001709, 6.14073761844, 952.3570027075],
    [0.00000001784, 1.05243716682, 353.301065017],
    [0.000000017, 1.1741886417, 739.0579072695],
    [0.00000001609, 1.35009554392, 84.9335269539],
    [0.00000002038, 2.47570829812, 26.826702943],
    [0.0000000187, 5.61729116529, 2957.7331481288],
    [0.00000001962, 0.13564680851, 213.1390367436],
    [0.00000002041, 3.31354526279, 1596.1864422846],
    [0.00000001612, 6.19495100885, 432.0148168474],
    [0.00000001742, 2.87947098602, 179.3588454942],
    [0.00000001964, 2.84253666387, 429.0458714308],
    [0.00000001805, 0.60932632638, 532.6117264014],
    [0.00000001647, 0.82347900016, 214.5711198252],
    [0.00000001893, 4.33962647901, 173.9422195228],
    [0.00000001689, 1.13037158144, 586.3133163972],
    [0.00000001523, 2.71561930244, 73.297125859],
    [0.00000001524, 5.26558677448, 5429.8794682394],
    [0.00000001582, 2.79533721474, 842.9014410135],
    [0.00000001608, 2.33230359324, 418.5214360287],
    [0.00000001579, 1.15182102801, 731.9443602687],
    [0.00000001689, 1.91915438546, 630.3360587584],
    [0.0000000199, 5.23790221176, 550.1378342197],
    [0.00000001772, 2.95372411478, 172.2452984934],
    [0.00000001596, 0.99004701777, 953.1077622329],
    [0.00000001784, 3.9139103236, 159.1244246902],
    [0.00000001592, 2.99690086808, 45.5766510387],
    [0.00000001968, 0.23073879009, 220.364458329],
    [0.00000001549, 5.88699595922, 60.5545045657],
    [0.00000001459, 5.51999778036, 273.8536000037],
    [0.00000001909, 2.78415262815, 418.0001711669],
    [0.00000001445, 3.25530914937, 453.424893819],
    [0.00000001454, 0.16250693313, 115.6229471908],
    [0.00000001566, 2.24077018103, 1056.2005364515],
    [0.00000001412, 3.45442909885, 354.9979860464],
    [0.00000001564, 3.38591337689, 409.1897031367],
    [0.00000001631, 1.06286709889, 213.5597278689],
    [0.00000001415, 1.3209187759, 373.9079928365],
    [0.00000001389, 0.40584159469, 9360.089164459],
    [0.00000001663, 2.33357114562, 188.0263011725],
    [0.00000001426, 5.44677783737, 864.2420820159],
    [0.00000001716, 3.96056093028, 1699.2792165032],
    [0.00000001682, 0.3974767032, 17.4084877393],
    [0.00000001368, 5.83289186692, 569.0478410098],
    [0.00000001416, 3.65464640816, 6.8529145699],
    [0.00000001469, 3.4906919383, 934.9485149682],
    [0.0000000133, 4.41794310534, 3914.0223040994],
    [0.00000001309, 1.29979865382, 428.0826635843],
    [0.000000013, 1.57748627871, 238.5718897035],
    [0.00000001389, 1.31202796503, 6275.9623029906],
    [0.00000001384, 0.67585082323, 2751.5475996916],
    [0.00000001471, 1.21149871903, 2531.1349572528],
    [0.00000001334, 4.11154515525, 206.9363079626],
    [0.00000001601, 0.93356520728, 355.7487455718],
    [0.00000001259, 2.56678207309, 850.0149880143],
    [0.00000001277, 0.41764451386, 100.6450936638],
    [0.00000001436, 4.06045514506, 177.8743727859],
    [0.00000001308, 1.01324076289, 423.6774295692],
    [0.00000001541, 6.03020449918, 292.0128472684],
    [0.00000001307, 5.83815678434, 5863.5912061162],
    [0.00000001613, 2.45074803642, 1049.0869894507],
    [0.00000001249, 3.01518429832, 464.7312265138],
    [0.0000000125, 6.23516728885, 823.9914342234],
    [0.00000001275, 2.68217384213, 637.4496057592],
    [0.00000001249, 2.97028182853, 51749.20809227239],
    [0.0000000124, 2.66940683813, 2700.7151403858],
    [0.00000001456, 1.85558224828, 96.8729990951],
    [0.00000001491, 4.98649587341, 295.1942410061],
    [0.0000000123, 4.27283851216, 12139.5535091068],
    [0.00000001292, 2.73196017809, 10206.1719992102],
    [0.00000001247, 3.77399749791, 504.561183181],
    [0.00000001408, 1.02955773079, 518.3846323998],
    [0.00000001223, 1.1220209384, 221.1634019642],
    [0.0000000142, 4.39795293289, 606.7601855223],
    [0.0000000119, 1.57292553631, 820.0592809603],
    [0.00000001247, 0.99102599652, 9793.8009023358],
    [0.00000001234, 1.10826361423, 2303.6087678132],
    [0.00000001186, 4.55984967028, 9808.5381846614],
    [0.00000001346, 4.94456950019, 384.0599212231],
    [0.00000001514, 3.6039229173, 2015.6710861598],
    [0.00000001432, 2.28704432909, 525.4981794006],
    [0.00000001129, 0.8710034062, 162.0933701068],
    [0.00000001196, 5.1348521485, 227.3137411185],
    [0.00000001339, 2.48923887712, 206.706813299],
    [0.00000001421, 1.65379789078, 857.1285350151],
    [0.00000001162, 1.92099315083, 220.9339073006],
    [0.00000001277, 4.85435999187, 54.1746707478],
    [0.00000001153, 5.33028034679, 233.9060232575],
    [0.00000001214, 4.11324721963, 3377.217792004],
    [0.00000001109, 5.68915582674, 162.8965192589],
    [0.00000001068, 4.85383480876, 611.4430983108],
    [0.00000001119, 1.40805686363, 1987.2168981566],
    [0.00000001085, 0.6420814819, 731.6837278378],
    [0.00000001435, 3.20880139888, 835.7878940127],
    [0.00000001184, 2.99776919968, 199.2844497575],
    [0.00000001281, 3.1224533951, 427.3489504014],
    [0.00000001058, 5.17851282929, 306.0969289181],
    [0.00000001152, 4.39244449554, 199.9657733137],
    [0.00000001036, 3.68027119804, 597.3590166611],
    [0.00000001055, 3.25561743426, 394.3548619616],
    [0.00000001127, 4.3325537196, 552.5855147745],
    [0.00000001213, 6.2144761211, 42.5382696529],
    [0.00000001117, 3.74367882111, 214.1928673153],
    [0.00000001023, 3.84199833949, 894.8408795276],
    [0.00000001042, 5.3012007859, 450.9772132642],
    [0.0000000129, 3.96221234564, 318.8395502114],
    [0.00000001073, 4.10012122884, 188.1693135244],
    [0.00000001204, 0.3770236575, 393.4610900843],
    [0.00000001214, 2.01826978554, 401.3253966105],
    [0.00000001018, 0.02946649279, 2840.4132799086],
    [0.00000001237, 5.41088851225, 425.8474313506],
    [0.00000001187, 5.16511890602, 838.218528225],
    [0.00000001276, 2.93572146232, 1457.525933062],
    [0.00000000994, 3.40079885702, 211.6021744086],
    [0.00000001042, 2.42209320898, 361.3778198643],
    [0.00000001093, 3.66289018246, 226.6324175623],
    [0.00000000978, 3.76334208607, 5856.4776591154],
    [0.00000001263, 2.09195268609, 78.7137518304],
    [0.00000001009, 5.85963705048, 1268.7488723641],
    [0.00000001148, 4.39543895068, 570.7447620392],
    [0.00000001051, 3.27272240682, 153.4953503977],
    [0.00000000975, 3.42924642244, 105.5404547734],
    [0.00000000997, 4.30943991893, 212.4053235607],
    [0.00000000954, 3.88548755058, 171.6545976624],
    [0.0000000096, 1.9018000528, 1159.2933106701],
    [0.00000000953, 3.40787141587, 244.791664827],
    [0.00000000969, 1.93369993197, 525.7588118315],
    [0.00000000918, 1.73738789723, 223.3334037456],
    [0.00000001164, 5.05392864346, 263.7016716171],
    [0.00000000951, 4.23581224839, 92.940845832],
    [0.0000000116, 5.80630916592, 460.5384408198],
    [0.00000001186, 4.46262000755, 465.9550667912],
    [0.00000000931, 2.09868057209, 205.6642835754],
    [0.00000000942, 3.86810837922, 238.4288773516],
    [0.0000000102, 5.53181822898, 0.0481841098],
    [0.00000000995, 2.0345788549, 6290.1893969922],
    [0.00000000888, 2.6095759299, 1912.5783119412],
    [0.00000000873, 5.7843339302, 480.7728616238],
    [0.00000000854, 1.63255087291, 328.2407190726],
    [0.00000001123, 4.07401922216, 3693.6096616606],
    [0.00000000934, 3.52355235083, 10220.3990932118],
    [0.00000000833, 3.0330222784, 532.8723588323],
    [0.00000001007, 2.73615455688, 4841.8572720668],
    [0.0000000087, 1.06968760644, 51.2057253312],
    [0.00000000891, 1.36817544763, 700.4517908797],
    [0.00000000833, 5.39754715806, 159.7151255212],
    [0.00000000854, 1.91765015557, 622.4887985747],
    [0.00000000976, 3.09106001923, 2332.0629558164],
    [0.00000000819, 5.55683690482, 462.0229135281],
    [0.000000008, 1.4704267746, 969.6224780949],
    [0.00000000933, 1.40166917666, 287.9376816534],
    [0.00000000784, 1.6923516277, 477.8039162072],
    [0.00000000782, 3.98153416585, 702.1487119091],
    [0.0000000081, 5.87689161549, 561.934294009],
    [0.00000000858, 4.02964773169, 41.6444977756],
    [0.00000000819, 0.98885784755, 960.2213092337],
    [0.00000000882, 1.49559638306, 760.25553592],
    [0.00000000767, 2.46787654531, 402.2191684878],
    [0.00000000851, 3.64678001195, 348.635198571],
    [0.00000000852, 1.03470840672, 2620.0006374698],
    [0.0000000077, 4.67090683753, 16.6747745564],
    [0.00000000849, 5.27994730935, 74.6385862154],
    [0.00000000854, 2.56811257488, 432.7485300303],
    [0.00000000767, 1.11806243753, 2847.5268269094],
    [0.00000000729, 0.4417199071, 898.7730327907],
    [0.00000000776, 5.54603607568, 3171.0322435668],
    [0.00000000721, 6.05392551158, 91.7864415238],
    [0.00000000739, 3.57172839746, 775.233389447],
    [0.0000000073, 4.98865345688, 705.1176573257],
    [0.00000000705, 0.4494244575, 219.6618829134],
    [0.00000000708, 0.69014726046, 1048.3362299253],
    [0.00000000706, 2.22974712805, 29.2049475286],
    [0.00000000711, 0.00981284716, 2115.5824666407],
    [0.00000000722, 4.14075205197, 225.0785088848],
    [0.00000000735, 1.54083195463, 201.9927627432],
    [0.00000000746, 4.08997409526, 849.2642284889],
    [0.00000000729, 2.81779134868, 419.532827985],
    [0.00000000837, 1.00844734156, 4127.3213995374],
    [0.00000000939, 0.46037763932, 5488.8681053816],
    [0.00000000939, 1.85473712038, 5062.2699145056],
    [0.00000000721, 1.62872794201, 2200.5159935946],
];

const R2: &[Term] = &[
    [0.00436902464, 4.78671673044, 213.299095438],
    [0.0007192276, 2.50069994874, 206.1855484372],
    [0.00049766792, 4.9716815087, 220.4126424388],
    [0.00043220894, 3.86940443794, 426.598190876],
    [0.00029645554, 5.96310264282, 7.1135470008],
    [0.0000414165, 4.10670940823, 433.7117378768],
    [0.00004720909, 2.47527992423, 199.0720014364],
    [0.0000378937, 3.09771025067, 639.897286314],
    [0.0000296399, 1.37206248846, 103.0927742186],
    [0.00002556363, 2.85065721526, 419.4846438752],
    [0.00002208457, 6.27588858707, 110.2063212194],
    [0.00002187621, 5.85545832218, 14.2270940016],
    [0.00001956896, 4.92448618045, 227.5261894396],
    [0.00002326801, 0.0, 0.0],
    [0.0000092384, 5.46392422737, 323.5054166574],
    [0.00000705936, 2.97081280098, 95.9792272178],
    [0.00000546115, 4.12854181522, 412.3710968744],
    [0.00000373838, 5.83435991809, 117.3198682202],
    [0.00000360882, 3.27703082368, 647.0108333148],
    [0.0000035635, 3.19152043942, 210.1177017003],
    [0.00000390627, 4.48106176893, 216.4804891757],
    [0.00000431485, 5.17825414612, 522.5774180938],
    [0.00000325598, 2.26867601656, 853.196381752],
    [0.00000405018, 4.17294157872, 209.3669421749],
    [0.00000204494, 0.0877484859, 202.2533951741],
    [0.00000206854, 4.02188336738, 735.8765135318],
    [0.00000178474, 4.09716541453, 440.8252848776],
    [0.00000180143, 3.59704903955, 632.7837393132],
    [0.00000153656, 3.13470530382, 625.6701923124],
    [0.00000147779, 0.13614300541, 302.164775655],
    [0.00000123189, 4.18895309647, 88.865680217],
    [0.00000133076, 2.5935046942, 191.9584544356],
    [0.00000100367, 5.46056190585, 3.1813937377],
    [0.00000131975, 5.93293968941, 309.2783226558],
    [0.00000097235, 4.01832604356, 728.762966531],
    [0.00000110709, 4.77853798276, 838.9692877504],
    [0.00000119053, 5.55385105975, 224.3447957019],
    [0.00000093852, 4.38395529912, 217.2312487011],
    [0.00000108701, 5.29310899841, 515.463871093],
    [0.00000078609, 5.72525447528, 21.3406410024],
    [0.00000081468, 5.10897365253, 956.2891559706],
    [0.00000096412, 6.25859229567, 742.9900605326],
    [0.00000069228, 4.04901237761, 3.9321532631],
    [0.00000065168, 3.77713343518, 1052.2683831884],
    [0.00000064088, 5.81235002453, 529.6909650946],
    [0.00000062541, 2.18445116349, 195.1398481733],
    [0.00000056987, 3.14666549033, 203.0041546995],
    [0.00000055979, 4.8410842286, 234.6397364404],
    [0.0000005294, 5.07780548444, 330.6189636582],
    [0.00000050635, 2.77318570728, 942.062061969],
    [0.00000041649, 4.79014211005, 63.7358983034],
    [0.00000044858, 0.56460613593, 269.9214467406],
    [0.00000041357, 3.73496404402, 316.3918696566],
    [0.00000052847, 3.92623831484, 949.1756089698],
    [0.00000038398, 3.73966157784, 1045.1548361876],
    [0.00000037583, 4.18924633757, 536.8045120954],
    [0.00000035285, 2.90795856092, 284.1485407422],
    [0.00000033576, 3.80465978802, 149.5631971346],
    [0.00000041073, 4.57870454147, 1155.361157407],
    [0.00000030412, 2.48140171991, 860.3099287528],
    [0.00000031373, 4.84075951849, 1272.6810256272],
    [0.00000030218, 4.3518629447, 405.2575498736],
    [0.0000003943, 3.50858482049, 422.6660376129],
    [0.00000029658, 1.58886982096, 1066.49547719],
    [0.00000035202, 5.94478241578, 1059.3819301892],
    [0.00000025829, 3.54946335477, 1368.660252845],
    [0.00000026283, 4.81567477177, 124.433415221],
    [0.00000029963, 3.66312205813, 429.7795846137],
    [0.00000033011, 4.96879544579, 831.8557407496],
    [0.00000024305, 5.31133255082, 10.2949407385],
    [0.00000026332, 4.4525327339, 223.5940361765],
    [0.00000022108, 2.76092021113, 415.5524906121],
    [0.00000027187, 1.66347897738, 277.0349937414],
    [0.00000021639, 1.03836302307, 11.0457002639],
    [0.00000019713, 2.52194629263, 1258.4539316256],
    [0.00000017062, 3.27669927228, 654.1243803156],
    [0.00000017261, 3.49414816663, 1361.5467058442],
    [0.00000016097, 1.73396878598, 490.3340891794],
    [0.00000021099, 3.62102032955, 1265.5674786264],
    [0.00000017692, 4.31141612385, 1471.7530270636],
    [0.00000013458, 0.32327889681, 295.0512286542],
    [0.00000012586, 3.13794576887, 74.7815985673],
    [0.00000012023, 2.32917797741, 210.8514148832],
    [0.0000001512, 3.59558424278, 265.9892934775],
    [0.00000012959, 4.62359706368, 1589.0728952838],
    [0.00000015424, 5.01335704925, 127.4717966068],
    [0.00000011193, 4.54981248285, 81.7521332162],
    [0.00000013449, 4.88710089777, 437.6438911399],
    [0.00000010673, 5.05234757424, 191.2076949102],
    [0.00000013963, 3.04990968366, 423.4167971383],
    [0.00000010614, 5.02845923229, 137.0330241624],
    [0.00000014382, 4.68720080027, 1148.2476104062],
    [0.0000001347, 1.90280407135, 408.4389436113],
    [0.00000010077, 5.20426583827, 340.7708920448],
    [0.00000010323, 3.34460279759, 1685.0521225016],
    [0.00000009563, 3.17317920222, 351.8165923087],
    [0.00000011295, 5.47808960704, 1375.7737998458],
    [0.00000008617, 2.81294528041, 99.9113804809],
    [0.0000000846, 3.22691940753, 1677.9385755008],
    [0.00000007914, 2.35624291874, 1574.8458012822],
    [0.00000007587, 6.08171425316, 231.4583427027],
    [0.00000009175, 3.40072244924, 1581.959348283],
    [0.00000007337, 2.00393601815, 131.4039498699],
    [0.0000000824, 4.04095881407, 1788.1448967202],
    [0.00000007579, 3.68311134272, 846.0828347512],
    [0.00000006691, 4.37253800717, 145.6310438715],
    [0.00000007539, 3.29482043104, 750.1036075334],
    [0.00000006367, 4.00239137708, 447.9388318784],
    [0.00000006249, 4.5560367194, 106.2741679563],
    [0.00000006489, 1.33782087599, 215.7467759928],
    [0.00000006501, 3.78204726337, 313.2104759189],
    [0.00000005978, 0.55276980086, 18.1592472647],
    [0.00000006171, 2.84712795642, 138.5174968707],
    [0.00000006837, 4.83481646949, 319.5732633943],
    [0.00000006678, 5.43046031699, 508.3503240922],
    [0.00000007175, 4.37855723752, 1464.6394800628],
    [0.00000005753, 4.14268749228, 543.9180590962],
    [0.00000005727, 4.35383078313, 1905.4647649404],
    [0.00000005101, 2.63866058897, 288.0806940053],
    [0.00000005311, 3.6252084951, 6076.8903015542],
    [0.00000005498, 4.19972735173, 721.6494195302],
    [0.00000005089, 5.04845206653, 10007.0999977738],
    [0.00000005505, 1.13479635941, 56.6223513026],
    [0.0000000482, 3.30043078578, 76.2660712756],
    [0.00000004915, 6.17790518458, 483.2205421786],
    [0.00000005048, 2.44627820757, 628.8515860501],
    [0.00000004534, 1.19648682598, 200.7689224658],
    [0.00000004817, 3.11549733365, 2001.4439921582],
    [0.00000004712, 1.26507812515, 6062.6632075526],
    [0.00000004811, 5.78388270496, 184.8449074348],
    [0.00000004775, 0.76197795755, 333.657345044],
    [0.00000004514, 0.95293919611, 343.2185725996],
    [0.00000004525, 2.68827745072, 9992.8729037722],
    [0.00000004378, 0.80241129896, 222.8603229936],
    [0.00000004873, 5.92092913946, 618.5566453116],
    [0.00000004142, 1.91878383159, 497.4476361802],
    [0.00000005112, 4.50449287745, 416.3032501375],
    [0.00000004125, 1.98204847532, 347.8844390456],
    [0.00000004045, 2.87666810085, 38.1330356378],
    [0.00000004133, 2.90478811425, 107.0249274817],
    [0.00000004035, 2.92972681787, 1994.3304451574],
    [0.00000004916, 3.12316267561, 1898.3512179396],
    [0.00000003657, 3.24680246734, 362.8622925726],
    [0.00000003753, 0.87719890943, 703.6331846174],
    [0.00000003576, 3.48080143501, 388.4651552382],
    [0.00000003555, 4.08436297683, 430.5303441391],
    [0.00000003598, 0.05255328597, 32.2433289144],
    [0.00000003561, 5.46414552453, 6283.0758499914],
    [0.0000000348, 1.81622589595, 70.8494453042],
    [0.00000003827, 3.1204122849, 635.9651330509],
    [0.00000003399, 0.54882815021, 10213.285546211],
    [0.00000003399, 3.5183335608, 629.6023455755],
    [0.00000003364, 3.27821747958, 357.4456666012],
    [0.0000000326, 1.97623748027, 203.7378678824],
    [0.00000003118, 2.18465627368, 1891.2376709388],
    [0.00000003163, 1.26040995242, 134.5853436076],
    [0.00000004004, 5.45434102599, 1692.1656695024],
    [0.0000000318, 2.46319174788, 867.4234757536],
    [0.00000003389, 4.20503159673, 337.732510659],
    [0.00000003026, 2.19331614526, 217.964961884],
    [0.00000003573, 5.5509724081, 113.3877149571],
    [0.00000003682, 3.78966280284, 2104.5367663768],
    [0.00000003125, 4.09203641264, 1478.8665740644],
    [0.00000002881, 3.9081065024, 312.1990839626],
    [0.00000003199, 3.92123638342, 1038.0412891868],
    [0.00000004014, 5.17826893553, 404.5067903482],
    [0.00000003907, 4.1176719178, 1781.0313497194],
    [0.00000003144, 1.61185684069, 1073.6090241908],
    [0.00000003072, 5.00675625396, 312.4597163935],
    [0.00000003034, 5.46288652854, 258.8757464767],
    [0.00000002884, 2.38477237305, 181.0557665236],
    [0.00000002986, 0.88783591586, 1279.794572628],
    [0.00000002683, 0.00956197492, 195.8906076987],
    [0.00000003081, 5.6003473733, 216.2198567448],
    [0.00000002626, 6.12701960244, 273.1028404783],
    [0.00000002665, 2.31576422128, 565.1156877467],
    [0.00000003245, 3.87540558646, 85.8272988312],
    [0.0000000274, 5.73784096806, 160.6088973985],
    [0.00000002876, 4.74720607366, 213.2509113282],
    [0.00000002523, 5.30458920892, 444.7574381407],
    [0.00000002752, 5.0898453993, 1169.5882514086],
    [0.00000002889, 1.66674437398, 213.3472795478],
    [0.00000002923, 4.21481009033, 650.9429865779],
    [0.00000003036, 2.5542667535, 6069.7767545534],
    [0.00000003116, 2.67220972004, 52.6901980395],
    [0.00000002371, 0.89591351822, 121.2520214833],
    [0.00000002993, 3.96957827454, 9999.986450773],
    [0.00000003088, 0.40656113014, 561.1835344836],
    [0.00000002385, 4.74063881551, 218.7157214094],
    [0.00000002632, 1.12706218927, 344.7030453079],
    [0.00000002316, 4.08445262041, 131.5469622218],
    [0.00000002214, 3.37726228553, 22.0914005278],
    [0.00000002129, 3.32497715011, 358.9301393095],
    [0.00000002679, 1.6897140187, 208.633228992],
    [0.00000002607, 5.10250482155, 824.7421937488],
    [0.0000000225, 2.60474848767, 305.3461693927],
    [0.00000002087, 3.37293958793, 320.3240229197],
    [0.00000002693, 3.6215945647, 436.8931316145],
    [0.00000002492, 2.96129217279, 2214.7430875962],
    [0.00000002704, 2.88483697319, 643.0786800517],
    [0.00000002124, 1.61210282593, 218.9281697305],
    [0.00000002037, 4.63481160778, 188.0263011725],
    [0.00000002394, 3.46386258552, 6275.9623029906],
    [0.00000001973, 2.28886138203, 2627.1141844706],
    [0.00000001937, 5.67082364247, 28.4541880032],
    [0.0000000192, 4.25647211328, 546.956440482],
    [0.00000002498, 3.57572154405, 2420.9286360334],
    [0.00000001898, 1.30987536388, 212.3358875915],
    [0.00000001852, 1.58508015515, 424.1505103212],
    [0.0000000185, 3.57830449726, 329.7251917809],
    [0.00000002128, 3.95329215734, 1795.258443721],
    [0.00000002236, 4.22073549375, 2221.856634597],
    [0.00000001933, 1.68771499202, 350.3321196004],
    [0.00000001799, 2.06541260431, 144.1465711632],
    [0.00000001904, 4.60953896857, 182.279606801],
    [0.00000002236, 5.17945392885, 99.1606209555],
    [0.00000001755, 2.73425330428, 291.262087743],
    [0.00000002231, 5.42548168745, 207.8824694666],
    [0.00000001848, 2.24194286719, 168.0525127994],
    [0.00000001726, 1.31878655393, 219.4494345923],
    [0.00000001709, 5.55913931846, 92.7978334801],
    [0.00000001693, 1.95360003617, 129.9194771616],
    [0.00000002064, 4.84900344498, 1141.1340634054],
    [0.00000001758, 5.05088656436, 214.2623032845],
    [0.00000001781, 2.8588015334, 636.7158925763],
    [0.000000019, 2.90295578617, 2310.722314814],
    [0.00000001759, 5.34657858395, 45.5766510387],
    [0.00000001654, 6.14450664508, 554.0699874828],
    [0.00000001578, 4.50941374663, 210.3783341312],
    [0.00000001681, 3.55136706992, 1354.4331588434],
    [0.00000001862, 3.01276783582, 2317.8358618148],
    [0.00000001589, 1.1577344835, 235.3904959658],
    [0.00000001551, 2.15558953807, 207.6700211455],
    [0.00000001874, 4.12861627986, 225.8292684102],
    [0.00000001621, 3.29992957653, 1670.8250285],
    [0.00000001911, 0.1772431914, 12.5301729722],
    [0.00000001477, 5.9027026057, 1.4844727083],
    [0.00000001618, 5.72513459206, 1485.9801210652],
    [0.00000001446, 1.7810458992, 1382.8873468466],
    [0.00000001683, 3.43534671475, 2428.0421830342],
    [0.00000001542, 5.51223038941, 204.7010757289],
    [0.0000000142, 2.07339356364, 198.321241911],
    [0.00000001444, 5.56032454849, 128.3655684841],
    [0.00000001476, 6.12782257368, 212.7778305762],
    [0.00000001474, 0.33626790634, 213.8203602998],
    [0.00000001428, 3.25039966249, 945.9942152321],
    [0.0000000141, 0.68747644676, 429.0458714308],
    [0.00000001752, 2.70090942746, 12.7426212933],
    [0.00000001681, 4.97526853273, 2008.557539159],
    [0.00000001408, 0.80461100746, 1585.1407420207],
    [0.00000001485, 0.49674043855, 120.358249606],
    [0.0000000149, 2.68459799437, 207.1487562837],
    [0.00000001411, 4.36399216092, 5863.5912061162],
    [0.00000001315, 4.73430848989, 241.7532834412],
    [0.00000001516, 4.99488503706, 1162.4747044078],
    [0.0000000131, 1.98714265058, 563.6312150384],
    [0.00000001286, 2.12891372062, 251.4321310758],
    [0.00000001271, 5.70165238307, 2.9207613068],
    [0.00000001312, 1.68811514551, 2207.6295405954],
    [0.00000001259, 0.35924965717, 334.5511169213],
    [0.00000001252, 2.14513440216, 1055.4497769261],
    [0.00000001401, 6.13250261735, 1802.3719907218],
    [0.00000001343, 5.79995727295, 9793.8009023358],
    [0.00000001228, 3.29059284057, 661.2379273164],
    [0.00000001202, 2.88792018909, 2413.8150890326],
    [0.00000001286, 5.72360160371, 298.2326223919],
    [0.00000001357, 0.93175963411, 217.491881132],
    [0.00000001356, 2.28121627817, 601.7642506762],
    [0.0000000119, 1.94993809928, 501.3797894433],
    [0.00000001304, 0.3733792328, 3473.1970192218],
    [0.0000000135, 2.8723562232, 142.4496501338],
    [0.00000001349, 3.21102203937, 175.1660598002],
    [0.00000001312, 3.70149813509, 2111.6503133776],
    [0.00000001129, 1.08860603834, 842.1506814881],
    [0.00000001237, 0.08698781252, 526.5095713569],
    [0.00000001217, 3.8983534984, 209.106309744],
    [0.00000001467, 1.16228775027, 621.7380390493],
    [0.00000001044, 0.30512759901, 436.1594184316],
    [0.0000000114, 5.33720637097, 114.1384744825],
    [0.00000001295, 4.70261675421, 9786.687355335],
    [0.00000001037, 4.07846687083, 156.6767441354],
    [0.00000001391, 4.73554028436, 398.1440028728],
    [0.00000001167, 5.68899703631, 479.2883889155],
    [0.00000001035, 5.34279429465, 327.4375699205],
    [0.00000000997, 1.19323192891, 710.7467316182],
    [0.00000001193, 5.17722376816, 98.8999885246],
    [0.00000001165, 4.58588490135, 732.6951197941],
    [0.00000001161, 4.90854984994, 10206.1719992102],
    [0.00000001144, 0.5039478414, 3906.9087570986],
    [0.00000001182, 3.69482624364, 2854.6403739102],
    [0.0000000097, 2.89031410383, 1987.2168981566],
    [0.00000001039, 0.48694895443, 525.4981794006],
    [0.00000001079, 3.61750956217, 2097.423219376],
    [0.00000001148, 3.31015591733, 5856.4776591154],
    [0.00000001241, 4.31971543677, 230.7075831773],
    [0.0000000091, 4.59825926062, 380.12776796],
    [0.00000000907, 1.34912454077, 685.4739373527],
    [0.00000001166, 1.61085609717, 5849.3641121146],
    [0.00000000882, 6.12045540405, 519.3960243561],
    [0.00000000963, 4.96065454054, 699.7010313543],
    [0.00000001062, 5.13323858077, 2751.5475996916],
    [0.00000000865, 6.12821112133, 245.5424243524],
    [0.000000011, 2.18435744407, 1699.2792165032],
    [0.00000000822, 5.55083534581, 739.0579072695],
    [0.00000000926, 2.01158276144, 417.0369633204],
    [0.00000000813, 5.18401872205, 214.7835681463],
    [0.00000001033, 5.48677848094, 3995.7744373156],
    [0.00000000872, 3.02363724703, 306.0969289181],
    [0.00000000796, 0.4434366454, 486.4019359163],
    [0.00000000878, 1.82164034386, 135.336103133],
    [0.00000000791, 2.14989417962, 2620.0006374698],
    [0.00000000881, 2.39697554334, 289.5651667136],
    [0.00000000782, 4.50471317138, 980.6681783588],
    [0.00000000783, 1.14229319753, 540.7366653585],
    [0.00000000831, 0.69937251013, 421.93232443],
    [0.0000000077, 2.40292326155, 576.1613880106],
    [0.0000000095, 5.97621460162, 196.6243208816],
    [0.00000000814, 4.19303098086, 831.1049812242],
    [0.00000000969, 4.78071024754, 326.6868103951],
    [0.0000000076, 0.4486053353, 425.6349830295],
    [0.00000000907, 0.94781730418, 525.7588118315],
    [0.00000000788, 0.14287187051, 916.9322800554],
    [0.00000000801, 1.863831191, 3039.485281345],
    [0.00000000801, 0.46947170994, 3466.083472221],
    [0.00000000747, 6.05374861925, 211.8146227297],
    [0.00000000968, 3.02618272726, 2634.2277314714],
    [0.00000000739, 2.27110740297, 2303.6087678132],
    [0.0000000075, 5.48554383902, 173.9422195228],
    [0.00000001024, 1.9156492556, 229.9738699944],
    [0.00000000816, 4.98990432666, 4209.0735327536],
    [0.00000000728, 1.30997967935, 511.5317178299],
    [0.00000000716, 3.74192651696, 3053.7123753466],
    [0.00000000727, 0.39191881243, 1493.093668066],
    [0.00000000717, 2.68899513085, 228.276948965],
    [0.00000000739, 2.12749199443, 1176.7017984094],
    [0.00000000805, 0.0718719391, 556.5176680376],
    [0.00000000835, 3.482878557, 84.9335269539],
    [0.0000000079, 0.48073040004, 4017.115078318],
    [0.00000000725, 1.96643065215, 220.4608265486],
    [0.00000000683, 2.68825142163, 151.0476698429],
    [0.00000000739, 3.33688408107, 953.1077622329],
    [0.00000000745, 6.22304530635, 1269.4996318895],
];

const R3: &[Term] = &[
    [0.00020315005, 3.02186626038, 213.299095438],
    [0.00008923581, 3.19144205755, 220.4126424388],
    [0.00006908677, 4.35174889353, 206.1855484372],
    [0.00004087129, 4.22406927376, 7.1135470008],
    [0.00003879041, 2.01056445995, 426.598190876],
    [0.00001070788, 4.20360341236, 199.0720014364],
    [0.00000907332, 2.28344368029, 433.7117378768],
    [0.00000606121, 3.17458570534, 227.5261894396],
    [0.00000596639, 4.13455753351, 14.2270940016],
    [0.00000483181, 1.17345973258, 639.897286314],
    [0.00000393174, 0.0, 0.0],
    [0.00000229472, 4.69838526383, 419.4846438752],
    [0.0000018825, 4.59003889007, 110.2063212194],
    [0.00000149508, 3.201994444, 103.0927742186],
    [0.00000121442, 3.76831374104, 323.5054166574],
    [0.00000101215, 5.81884137755, 412.3710968744],
    [0.00000102146, 4.70974422803, 95.9792272178],
    [0.00000093078, 1.43531270909, 647.0108333148],
    [0.00000072601, 4.15395598507, 117.3198682202],
    [0.00000084347, 2.63462379693, 216.4804891757],
    [0.00000062198, 2.31239345505, 440.8252848776],
    [0.00000045145, 4.37317047297, 191.9584544356],
    [0.00000049536, 2.38854232908, 209.3669421749],
    [0.00000054829, 0.30526468471, 853.196381752],
    [0.00000040498, 1.83836569765, 302.164775655],
    [0.00000038089, 5.94455115525, 88.865680217],
    [0.00000032243, 4.01146349387, 21.3406410024],
    [0.00000040671, 0.6884518321, 522.5774180938],
    [0.00000028209, 5.77193013961, 210.1177017003],
    [0.00000024976, 3.06249709014, 234.6397364404],
    [0.00000020824, 4.92570695678, 625.6701923124],
    [0.0000002507, 0.73137425284, 515.463871093],
    [0.00000017485, 5.73135068691, 728.762966531],
    [0.00000018009, 1.45593152612, 309.2783226558],
    [0.00000016927, 3.52771580455, 3.1813937377],
    [0.00000013437, 3.36479898106, 330.6189636582],
    [0.0000001109, 3.37212682914, 224.3447957019],
    [0.00000011082, 3.41719974793, 956.2891559706],
    [0.00000009978, 1.58791582772, 202.2533951741],
    [0.00000011551, 5.99093726182, 735.8765135318],
    [0.000000105, 6.06911092266, 405.2575498736],
    [0.00000009144, 2.93557421591, 124.433415221],
    [0.00000008737, 4.65432480769, 632.7837393132],
    [0.00000010023, 0.58247011625, 860.3099287528],
    [0.00000007482, 4.50669216436, 942.062061969],
    [0.00000010091, 0.28268774007, 838.9692877504],
    [0.00000009243, 2.57034547708, 223.5940361765],
    [0.00000008652, 1.75808100881, 429.7795846137],
    [0.00000007564, 1.45635107202, 654.1243803156],
    [0.00000007058, 5.47394786065, 1045.1548361876],
    [0.0000000697, 1.51811695028, 422.6660376129],
    [0.00000008067, 4.48457709292, 742.9900605326],
    [0.00000006817, 4.83084424818, 316.3918696566],
    [0.00000007693, 0.43769724671, 831.8557407496],
    [0.00000007934, 4.20112367712, 195.1398481733],
    [0.00000006119, 2.33960392135, 269.9214467406],
    [0.00000005589, 1.14518720694, 284.1485407422],
    [0.00000005564, 4.18123189068, 529.6909650946],
    [0.00000005034, 2.12020038657, 295.0512286542],
    [0.00000006556, 3.42459866876, 10.2949407385],
    [0.00000005544, 2.46823271699, 536.8045120954],
    [0.00000006189, 6.0143382752, 1066.49547719],
    [0.00000005649, 0.82784598388, 217.2312487011],
    [0.00000004264, 3.23245736673, 1272.6810256272],
    [0.0000000445, 0.9247780859, 203.0041546995],
    [0.00000003268, 4.32777516976, 1258.4539316256],
    [0.00000003655, 0.05832123987, 81.7521332162],
    [0.00000003951, 0.11124996745, 1155.361157407],
    [0.00000003773, 6.01157059552, 1052.2683831884],
    [0.00000002915, 5.64342950039, 3.9321532631],
    [0.00000003019, 2.19411778004, 447.9388318784],
    [0.00000002977, 1.8938734255, 149.5631971346],
    [0.00000003146, 0.19215180096, 1148.2476104062],
    [0.00000002763, 0.92363342001, 508.3503240922],
    [0.0000000279, 4.97199778427, 1677.9385755008],
    [0.00000002608, 2.99591016813, 1589.0728952838],
    [0.00000002881, 5.40535671721, 1361.5467058442],
    [0.00000002337, 1.30362271569, 184.8449074348],
    [0.00000002536, 3.71412120849, 408.4389436113],
    [0.0000000245, 3.22118361135, 319.5732633943],
    [0.00000002585, 2.31346415454, 543.9180590962],
    [0.00000002324, 5.87500715503, 721.6494195302],
    [0.0000000199, 0.51565577383, 416.3032501375],
    [0.0000000249, 4.24017800021, 1059.3819301892],
    [0.00000001935, 2.41463084855, 337.732510659],
    [0.00000001886, 0.53809070779, 635.9651330509],
    [0.00000001893, 5.62352727352, 11.0457002639],
    [0.00000002389, 5.73399981234, 313.2104759189],
    [0.000000019, 2.41000566465, 131.5469622218],
    [0.00000001743, 4.57646237847, 1994.3304451574],
    [0.00000001913, 5.17436386408, 2854.6403739102],
    [0.00000001946, 6.23355845623, 1471.7530270636],
    [0.00000001963, 6.17814558628, 1464.6394800628],
    [0.00000001838, 5.59464577559, 1038.0412891868],
    [0.00000001541, 0.60765337379, 210.8514148832],
    [0.00000001617, 1.75479346067, 195.8906076987],
    [0.00000001577, 0.55789908488, 2324.9494088156],
    [0.00000001492, 0.26624235633, 497.4476361802],
    [0.00000001659, 2.57526072926, 2090.3096723752],
    [0.00000001809, 1.82317819973, 436.8931316145],
    [0.00000001566, 6.15328100324, 490.3340891794],
    [0.00000001771, 6.11741716855, 1073.6090241908],
    [0.00000001456, 0.85374460914, 415.5524906121],
    [0.00000001645, 2.95335775161, 437.6438911399],
    [0.00000001391, 4.1202502856, 1574.8458012822],
    [0.00000001585, 5.96841377266, 1781.0313497194],
    [0.00000001507, 3.84895122542, 1251.3403846248],
    [0.00000001442, 5.32547705924, 2538.2485042536],
    [0.00000001805, 1.50973093681, 750.1036075334],
    [0.00000001462, 3.28599831588, 1884.124123938],
    [0.00000001482, 0.99340744053, 643.0786800517],
    [0.00000001312, 3.79347668996, 1567.7322542814],
    [0.00000001665, 0.02551523913, 423.4167971383],
    [0.00000001469, 5.35285153471, 1354.4331588434],
    [0.00000001352, 0.69945139243, 867.4234757536],
    [0.00000001124, 1.79624810407, 618.5566453116],
    [0.00000001126, 4.70052329245, 113.3877149571],
    [0.00000001122, 3.9553722427, 1891.2376709388],
    [0.00000001458, 1.50198846753, 430.5303441391],
    [0.00000001145, 5.13093399117, 25.2727942655],
    [0.00000001178, 2.97062300389, 241.7532834412],
    [0.00000001274, 2.29089799814, 2420.9286360334],
    [0.00000001071, 0.04888943982, 63.7358983034],
    [0.00000001377, 5.58271514873, 1382.8873468466],
    [0.00000001145, 3.10797488346, 2200.5159935946],
    [0.00000001076, 0.79465514815, 127.4717966068],
    [0.00000001046, 5.85060227045, 215.7467759928],
    [0.00000001082, 3.7258944551, 131.4039498699],
    [0.00000001218, 0.47504349592, 824.7421937488],
    [0.00000001116, 3.78039049056, 1375.7737998458],
    [0.00000000969, 5.90752273481, 265.9892934775],
    [0.0000000123, 1.41325962069, 2634.2277314714],
    [0.0000000107, 4.80334493874, 1987.2168981566],
    [0.00000000946, 6.25968535931, 2015.6710861598],
    [0.0000000103, 1.08973644893, 362.8622925726],
    [0.00000001072, 5.41838042079, 1279.794572628],
    [0.0000000088, 1.92224908504, 483.2205421786],
    [0.00000000878, 2.96591300878, 934.9485149682],
    [0.00000000879, 2.65659265685, 145.6310438715],
    [0.00000000872, 6.26261969664, 2.4476805548],
    [0.00000001082, 4.48298283322, 2214.7430875962],
    [0.00000000959, 0.74479087918, 16.6747745564],
    [0.00000001035, 4.05664979327, 231.4583427027],
    [0.00000000851, 0.09360495322, 628.8515860501],
    [0.00000000888, 5.98816755324, 2524.021410252],
    [0.00000000866, 3.1625926563, 2207.6295405954],
    [0.00000000843, 1.23731248821, 74.7815985673],
    [0.00000000809, 2.89742868175, 2008.557539159],
    [0.00000000779, 2.28434811609, 1478.8665740644],
    [0.0000000099, 5.32604038017, 2428.0421830342],
    [0.00000000795, 2.3817813581, 2228.9701815978],
    [0.00000000765, 4.7003367494, 1670.8250285],
    [0.00000001024, 4.23352869513, 1802.3719907218],
    [0.00000000831, 5.87457134912, 1368.660252845],
    [0.00000000717, 5.92144324994, 1685.0521225016],
    [0.00000000772, 1.15596098579, 3053.7123753466],
    [0.00000000691, 3.13193109668, 56.6223513026],
];

const R4: &[Term] = &[
    [0.0000120205, 1.41499446465, 220.4126424388],
    [0.00000707796, 1.16153570102, 213.299095438],
    [0.00000516121, 6.2397356833, 206.1855484372],
    [0.00000426664, 2.46924890293, 7.1135470008],
    [0.00000267736, 0.18659206741, 426.598190876],
    [0.00000170171, 5.95926972384, 199.0720014364],
    [0.00000145113, 1.44211060143, 227.5261894396],
    [0.00000150339, 0.4797016714, 433.7117378768],
    [0.00000121033, 2.40527320817, 14.2270940016],
    [0.00000047332, 5.56857488676, 639.897286314],
    [0.00000015745, 2.90112466278, 110.2063212194],
    [0.00000016668, 0.52920774279, 440.8252848776],
    [0.00000018954, 5.85626429118, 647.0108333148],
    [0.00000014074, 1.30343550656, 412.3710968744],
    [0.00000012708, 2.09349305926, 323.5054166574],
    [0.00000014724, 0.29905316786, 419.4846438752],
    [0.00000011133, 2.4630482599, 117.3198682202],
    [0.0000001132, 0.21785507019, 95.9792272178],
    [0.00000009233, 2.28127318068, 21.3406410024],
    [0.00000009246, 1.5649631283, 88.865680217],
    [0.0000000897, 0.68301278041, 216.4804891757],
    [0.00000007674, 3.59367715368, 302.164775655],
    [0.00000007823, 4.48688804175, 853.196381752],
    [0.0000000836, 1.27239488455, 234.6397364404],
    [0.00000009552, PI, 0.0],
    [0.00000004834, 2.58836294602, 515.463871093],
    [0.00000006059, 5.1677444874, 103.0927742186],
    [0.0000000441, 0.02211643085, 191.9584544356],
    [0.00000004364, 1.59622746023, 330.6189636582],
    [0.00000003676, 3.29899839673, 210.1177017003],
    [0.00000004364, 5.97349927933, 654.1243803156],
    [0.00000004447, 4.97415112184, 860.3099287528],
    [0.0000000322, 2.72684237392, 522.5774180938],
    [0.00000004005, 1.59858435636, 405.2575498736],
    [0.00000003099, 0.75235436533, 209.3669421749],
    [0.00000002464, 1.19167306488, 124.433415221],
    [0.00000003088, 1.32258934286, 728.762966531],
    [0.0000000222, 3.28087994088, 203.0041546995],
    [0.00000002127, 6.14648095022, 429.7795846137],
    [0.0000000211, 0.75462855247, 295.0512286542],
    [0.0000000202, 3.89394929749, 1066.49547719],
    [0.00000002248, 0.49319150178, 447.9388318784],
    [0.0000000218, 0.72761059998, 625.6701923124],
    [0.00000001809, 0.09057839517, 942.062061969],
    [0.00000001672, 1.39635398184, 224.3447957019],
    [0.00000001641, 3.0246830755, 184.8449074348],
    [0.00000001772, 0.81879250825, 223.5940361765],
    [0.00000001902, 2.00472814984, 831.8557407496],
    [0.000000016, 5.41185167676, 824.7421937488],
    [0.00000001505, 5.95520747253, 422.6660376129],
    [0.00000001133, 1.11512973946, 838.9692877504],
    [0.0000000119, 1.89600567803, 956.2891559706],
    [0.00000001487, 2.11906469507, 529.6909650946],
    [0.00000001409, 0.72254420236, 536.8045120954],
    [0.00000001125, 0.89062692183, 721.6494195302],
    [0.00000001301, 1.64867038984, 17.4084877393],
    [0.00000001164, 5.9695798184, 195.1398481733],
    [0.0000000095, 5.3608071329, 316.3918696566],
    [0.00000000985, 3.05768671768, 1574.8458012822],
    [0.0000000105, 1.59202481523, 735.8765135318],
    [0.00000000817, 4.92838813598, 56.6223513026],
    [0.0000000078, 2.72125404102, 508.3503240922],
    [0.00000000969, 1.00708261792, 1045.1548361876],
    [0.00000000716, 1.11042181341, 1169.5882514086],
];

pub static SATURN: Vsop87Table = Vsop87Table {
    variables: Variables::Spherical,
    reference: Reference::EclipticOfDate,
    series: [
        &[L0, L1, L2, L3, L4, L5],
        &[B0, B1, B2, B3, B4, B5],
        &[R0, R1, R2, R3, R4],
    ],
};
