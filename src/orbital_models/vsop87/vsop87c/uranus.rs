//! VSOP87C series for Uranus: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [19.16944479396, 5.48129363987, 75.0254160508],
    [1.33267708718, 6.16089978558, 0.2438174835],
    [0.44396480992, 1.65965632053, 149.8070146181],
    [0.14712072726, 3.42449547672, 73.5409433425],
    [0.14127113794, 4.39569319388, 76.50988875911],
    [0.06225592204, 5.14041718059, 1.7282901918],
    [0.01542809804, 4.12121005059, 224.5886131854],
    [0.01443286598, 2.65100655909, 148.32254190981],
    [0.00941982751, 1.66111566598, 11.2895177474],
    [0.00657433967, 0.57593488766, 151.2914873264],
    [0.00637676334, 4.21540624166, 63.9797157869],
    [0.00621475723, 3.05878846167, 77.9943614674],
    [0.00563553759, 4.80714363531, 72.05647063421],
    [0.00547585874, 3.63122642205, 86.07111631471],
    [0.00433273658, 5.66160493313, 74.53778108379],
    [0.00458904544, 3.90806753942, 3.21276290011],
    [0.00496011875, 0.59957126795, 529.9347825781],
    [0.00385773622, 6.18935243085, 138.76131435421],
    [0.00268150781, 0.96866014994, 213.5429129215],
    [0.00215803817, 5.30879023629, 38.3768531213],
    [0.00144768728, 2.31926691782, 71.09326278771],
    [0.00135315426, 5.51056178199, 78.9575693139],
    [0.00119632236, 4.10138480343, 39.86132582961],
    [0.0012498711, 2.51425439859, 111.67397898031],
    [0.00111232552, 5.12247819448, 223.1041404771],
    [0.00104563861, 3.90482142702, 146.8380692015],
    [0.00109354782, 4.45315493564, 34.9202727377],
    [0.00063579167, 0.29966151527, 299.37021175271],
    [0.00076241847, 2.53654184182, 63.49208081989],
    [0.00053591167, 3.9404543498, 4.1759707466],
    [0.000644205, 3.72849455609, 110.189506272],
    [0.0004456657, 0.46052856039, 73.0533083755],
    [0.00039200127, 2.68881030068, 4.6972356084],
    [0.00033660673, 2.51806070888, 65.46418849521],
    [0.0003433803, 3.03778732537, 226.07308589371],
    [0.00034546984, 1.84696372059, 79.47883417571],
    [0.00037552003, 4.14039081989, 202.0095776906],
    [0.00029546886, 6.00042096798, 70.5719979259],
    [0.00025683031, 5.30733054298, 9.8050450391],
    [0.00023447563, 4.09774770482, 145.874861355],
    [0.00022948537, 5.51505103176, 84.5866436064],
    [0.00031820127, 5.53944193731, 152.77596003471],
    [0.00022832266, 2.29382969939, 127.22797912329],
    [0.00028378722, 6.01789844072, 184.97110483931],
    [0.00026655018, 6.11025984035, 160.852714882],
    [0.00019671485, 5.53430548402, 74.91354146621],
    [0.00019648859, 2.28659171687, 75.1372906354],
    [0.00019896586, 0.57662115081, 12.77399045571],
    [0.00024486297, 1.99412405993, 1.24065522479],
    [0.00016842912, 0.47911269541, 52.446380556],
    [0.00022087252, 4.59910433514, 71.5688356672],
    [0.00020068191, 4.47381667533, 22.3352180113],
    [0.00019913902, 1.39857362559, 113.15845168861],
    [0.00018351147, 5.69970669527, 33.43580002939],
    [0.00016887001, 0.21283887905, 36.892380413],
    [0.00015173078, 2.88404559166, 41.3457985379],
    [0.0001124241, 6.11592492783, 71.8440223131],
    [0.00013948685, 6.27550136313, 221.61966776881],
    [0.00010809036, 1.69959188016, 78.2068097885],
    [0.0001359181, 2.55400587762, 87.555589023],
    [0.0001199731, 0.9488279446, 1059.6257476727],
    [0.00012401284, 6.21959182172, 72.577735496],
    [0.00011534891, 1.77255746394, 77.4730966056],
    [0.00009194297, 5.13684548839, 145.35359649321],
    [0.00008737279, 4.96955634864, 186.4555775476],
    [0.00009136217, 3.36421968897, 127.71561409031],
    [0.00009219832, 4.79646192202, 108.2173985967],
    [0.00007422726, 4.95959892966, 108.70503356371],
    [0.00007094598, 1.30379670348, 297.8857390444],
    [0.00006261877, 1.71362082374, 153.73916788121],
    [0.0000749065, 0.11367653768, 426.8420083595],
    [0.00007827357, 5.83003917523, 340.52707456129],
    [0.00006073898, 1.79808383323, 149.3193796511],
    [0.00005510674, 3.31059818622, 140.2457870625],
    [0.00006397195, 5.29054037494, 62.4952430786],
    [0.00005370666, 4.12500435843, 75.54668091261],
    [0.00005352595, 3.69257552001, 74.504151189],
    [0.00004493418, 1.11410223517, 66.9486612035],
    [0.00004261392, 3.96170766253, 265.745475994],
    [0.00005026106, 4.688254861, 18.40306474821],
    [0.00004641163, 3.40278945922, 36.404745446],
    [0.00004448201, 0.98197743832, 183.486632131],
    [0.0000378154, 1.01094840328, 10.8018827804],
    [0.00004750672, 4.95760164342, 74.0622082043],
    [0.00004350588, 5.87369411626, 70.08436295889],
    [0.00004446999, 0.29417874414, 114.6429243969],
    [0.00003313232, 0.52117217508, 83.1021708981],
    [0.000045125, 2.88455231924, 75.98862389731],
    [0.00003556191, 1.47647595802, 6.1817083167],
    [0.00003266875, 0.51825947223, 220.6564599223],
    [0.00003059638, 1.5253751707, 52.934015523],
    [0.00003576768, 1.12142187124, 137.2768416459],
    [0.00002881563, 2.7612732312, 374.15181032],
    [0.00003196605, 4.5558896506, 76.0222537921],
    [0.00002944255, 5.0978911586, 7.3573644843],
    [0.00003729115, 4.96516637585, 144.8659615262],
    [0.00002521158, 1.85148242342, 202.4972126576],
    [0.0000259596, 0.22431012776, 97.11681657861],
    [0.00002560051, 4.4425004316, 80.44204202221],
    [0.00002653876, 0.04778187588, 305.10235190919],
    [0.00002508094, 0.64297274411, 31.9513273211],
    [0.00001961925, 0.09387541521, 20.850745303],
    [0.00002229736, 0.63549038852, 80.963306884],
    [0.00002202407, 5.20629983391, 2.9375762542],
    [0.00001935845, 2.06583555933, 75.0736001606],
    [0.00001935843, 5.75516004795, 74.97723194101],
    [0.00002138399, 4.20897433466, 74.76478361991],
    [0.00002128668, 3.61197532719, 75.2860484817],
    [0.00002214188, 2.1859202608, 259.7527034066],
    [0.00001890291, 5.49936650879, 300.854684461],
    [0.00002249087, 3.34771929967, 138.2736793872],
    [0.00001926813, 1.2925828509, 159.36824217371],
    [0.00001799526, 5.73284739685, 74.8653573564],
    [0.00001794407, 2.08815174296, 75.1854747452],
    [0.00001908592, 0.91765709548, 69.0875252176],
    [0.00002175205, 3.14101293062, 131.6477673534],
    [0.00001898923, 4.22364589697, 206.42936592071],
    [0.00001654495, 3.89578357216, 277.2788112249],
    [0.00001785247, 1.20558646138, 56.8661687861],
    [0.00001617939, 1.98998613398, 2.69149803831],
    [0.00001860708, 1.67531170047, 42.83027124621],
    [0.00002180164, 1.2355688305, 479.044571432],
    [0.00001576477, 2.09193074602, 190.9638774267],
    [0.00001904361, 5.83571650342, 15.2216710105],
    [0.00002054711, 3.60264621769, 834.7933170038],
    [0.00001834581, 6.0597504758, 106.73292588839],
    [0.00001890085, 4.32104275484, 154.260432743],
    [0.00001795901, 1.73393986559, 227.557558602],
    [0.00001670623, 1.2060741979, 220.1351950605],
    [0.00001347353, 5.46539883456, 288.32451148881],
    [0.00001425992, 0.38776026293, 93.1846633155],
    [0.00001265397, 5.63850209574, 404.2629728647],
    [0.00001581901, 5.72246324321, 39.6006933987],
    [0.00001269733, 2.66547740633, 142.6934676173],
    [0.00001653676, 5.13281153725, 181.5145244557],
    [0.00001437856, 0.72853365638, 522.8212355773],
    [0.00001407281, 3.61754461658, 537.0483295789],
    [0.00001359462, 3.81802154525, 62.0076081116],
    [0.00001417609, 2.29697805296, 235.6343134493],
    [0.0000112229, 0.14112673022, 60.04756252381],
    [0.00001037982, 2.76177625247, 5.6604434549],
    [0.00001164766, 2.08226620054, 82.13896305161],
    [0.00001009353, 2.0238761458, 74.2746565254],
    [0.00001216357, 3.41823698867, 212.05844021321],
    [0.00000996588, 5.79711941494, 75.77617557621],
    [0.00000983856, 1.56441672942, 129.2000867986],
    [0.00001223267, 3.8437962171, 187.9400502559],
    [0.00001335581, 2.17715635407, 379.8839504765],
    [0.00001203897, 5.60031851266, 67.91186905],
    [0.0000114684, 2.42164879835, 296.4012663361],
    [0.00001000425, 0.10902349258, 8.32057233081],
    [0.00001191037, 5.58759862804, 50.6463936626],
    [0.00001128718, 3.94259181404, 230.3207533419],
    [0.00000930244, 3.76250779613, 276.79117625789],
    [0.00000857081, 6.06089726967, 68.4331339118],
    [0.00000912408, 1.69363364406, 149.6951400335],
    [0.00001170925, 2.02859165449, 110.45013870291],
    [0.00000857595, 1.50487359225, 90.0032695778],
    [0.00000989091, 2.61645612487, 35.6685401356],
    [0.00001054223, 5.53713388048, 14.258463164],
    [0.00000959939, 2.9012377236, 147.83490694279],
    [0.00000957455, 4.68244742095, 64.97655352819],
    [0.00000909789, 4.72919527392, 149.91888920271],
    [0.00000943313, 4.77502421061, 53.93085326429],
    [0.00000891565, 6.16624008939, 107.2205608554],
    [0.0000077548, 2.00068126371, 70.6056278207],
    [0.00000861039, 0.07017362216, 143.8691237849],
    [0.00000851667, 2.07466532945, 134.8291610911],
    [0.0000084229, 2.74294938604, 3.6883357796],
    [0.00000893222, 3.38882447852, 23.81969071961],
    [0.00000790626, 0.82969306173, 7.83293736379],
    [0.00000683506, 1.80707483601, 81.61769818981],
    [0.00000789879, 4.67531119051, 35.40790770471],
    [0.00000669882, 1.56521412524, 50.9619078477],
    [0.00000853775, 5.20540536482, 200.52510498229],
    [0.00000698863, 3.36651984265, 125.743506415],
    [0.00000814817, 6.23437914876, 143.38148881789],
    [0.00000862909, 5.03099273884, 162.3371875903],
    [0.00000845548, 6.20605203929, 203.49405039889],
    [0.00000797191, 2.22086891871, 99.40443843901],
    [0.00000766426, 2.46431012048, 68.80564092731],
    [0.00000609673, 4.95156945766, 24.1352049047],
    [0.0000065455, 3.88721455407, 109.701871305],
    [0.00000783834, 5.30108995878, 218.1630873852],
    [0.00000744901, 1.22651434994, 760.01171843649],
    [0.00000643611, 1.27158746409, 89.0400617313],
    [0.00000525538, 6.1969529265, 128.7124518316],
    [0.00000703451, 5.35556821897, 81.2451911743],
    [0.00000590282, 3.34460813817, 69.6087900794],
    [0.00000528305, 2.28084002864, 146.6256208804],
    [0.00000621414, 0.82570374928, 68.5998902506],
    [0.00000677104, 5.66627508966, 56.3785338191],
    [0.00000697582, 2.93128584821, 617.5620683027],
    [0.00000597125, 2.20653215822, 182.00215942271],
    [0.0000068978, 0.8894796757, 2.7251279331],
    [0.00000578345, 2.48116102766, 28.81562556571],
    [0.00000587454, 3.90812210311, 152.2546951729],
    [0.00000670562, 3.06119354039, 5.97595764],
    [0.00000596736, 0.23847810121, 116.18227885939],
    [0.00000480108, 4.14247181684, 415.3086731286],
    [0.00000505417, 2.53324420248, 157.8837694654],
    [0.00000551335, 1.14403413933, 261.2371761149],
    [0.00000584839, 6.18920235362, 258.26823069831],
    [0.00000571647, 1.1216688322, 194.89603068979],
    [0.00000473414, 1.32843094724, 134.3415261241],
    [0.00000551129, 5.62854491664, 59.55992755679],
    [0.00000518895, 2.30620424068, 352.06040979221],
    [0.00000444205, 3.75797687497, 329.48137429739],
    [0.00000531507, 6.0212962886, 54.41848823131],
    [0.00000449312, 1.03442910633, 542.78046973539],
    [0.00000486453, 0.33128845125, 73.6528179271],
    [0.00000437062, 1.29933406121, 1589.3167127673],
    [0.00000488485, 2.40589686793, 9.3174100721],
    [0.00000431252, 4.69836222247, 41.4006802921],
    [0.00000435419, 3.76505789238, 372.66733761171],
    [0.00000484495, 4.03440276126, 209.12312469139],
    [0.00000418899, 1.97412934294, 95.6323438703],
    [0.00000514102, 5.40821050729, 116.12739710521],
    [0.00000388869, 5.9663217737, 152.9884083558],
    [0.00000361158, 5.56439421115, 120.1144321225],
    [0.0000037187, 5.67993821009, 144.39038864671],
    [0.00000339152, 0.64656047679, 46.4536079686],
    [0.00000373018, 3.47226296213, 73.4290687579],
    [0.0000038293, 5.2129471638, 114.38229196601],
    [0.00000426834, 2.46975859086, 141.7302597708],
    [0.00000396238, 5.45517176193, 98.91680347199],
    [0.00000396936, 0.12474175505, 180.03005174739],
    [0.00000318113, 0.22602316909, 33.3809182752],
    [0.00000325989, 4.18961191162, 228.5207664485],
    [0.00000435822, 2.17402798911, 37.88921815429],
    [0.00000392309, 1.55188964788, 155.53915477459],
    [0.00000353063, 6.23671226488, 215.0273856298],
    [0.00000410664, 4.20954401513, 490.5779066629],
    [0.00000325464, 0.26699789914, 7.66618102501],
    [0.0000029989, 3.75278581215, 45.3328335552],
    [0.00000319736, 1.86158355595, 30.4668546128],
    [0.00000278968, 2.37528917719, 6.3484646555],
    [0.0000031288, 2.99684581751, 419.72846135871],
    [0.00000386565, 5.46895169467, 254.8116503147],
    [0.00000311788, 2.37646745038, 147.3593340633],
    [0.00000300229, 3.46713251313, 0.719390363],
    [0.00000337396, 5.17753753648, 150.7702224646],
    [0.00000253789, 1.48413722958, 19.36627259471],
    [0.00000308097, 5.63479635439, 640.1411037975],
    [0.00000252403, 0.29915428385, 150.3282794799],
    [0.00000238679, 5.71090385224, 553.82616999929],
    [0.00000266427, 1.01726382392, 105.2484531801],
    [0.00000278375, 1.17449170388, 29.44876501211],
    [0.00000306043, 1.75345400361, 6283.3196674749],
    [0.00000265739, 5.77720505204, 28.0673581678],
    [0.00000280569, 4.44867676294, 126.231141382],
    [0.00000300771, 1.99978996741, 984.8441491054],
    [0.00000229063, 5.90121206501, 33.9234349964],
    [0.00000226799, 5.35680022107, 121.2352065359],
    [0.00000238148, 4.3042058987, 2.20386307129],
    [0.0000019842, 4.7611853441, 69.91760662011],
    [0.00000220174, 0.46900159784, 44.31474395451],
    [0.00000220857, 5.01281205014, 47.9380806769],
    [0.00000211834, 4.9131549189, 0.7650823453],
    [0.00000257979, 5.01665522627, 1289.7026835311],
    [0.0000024051, 4.63405186786, 756.07956517339],
    [0.0000021387, 2.65681249594, 316.6356871401],
    [0.00000231462, 4.35067672591, 46.71424039951],
    [0.00000232197, 0.60568782891, 339.042601853],
    [0.00000214419, 2.75101540987, 189.42452296421],
    [0.00000219049, 3.86758077039, 213.0552779545],
    [0.00000241635, 1.97515700042, 102.84895673509],
    [0.00000198526, 0.31867538279, 61.01077037031],
    [0.00000237145, 1.57461819411, 342.0115472696],
    [0.00000173496, 1.31235751133, 116.6699138264],
    [0.00000194828, 2.42005289802, 218.6507223522],
    [0.00000175785, 3.10552908409, 57.4993082325],
    [0.00000167277, 0.90426589163, 30.300098274],
    [0.000001734, 2.71724777154, 681.2979666061],
    [0.00000214483, 2.48131614069, 135.7923689376],
    [0.0000020511, 0.2977891832, 216.67861467689],
    [0.00000168458, 3.08665425457, 80.1332254815],
    [0.00000164308, 5.42212132676, 467.9988711681],
    [0.00000203489, 1.11698481512, 148.84380677161],
    [0.00000177178, 0.65075297933, 103.597224133],
    [0.00000165274, 0.65702158328, 155.2236405895],
    [0.00000185802, 5.56639953504, 74.13164417351],
    [0.00000185802, 2.25459555455, 75.9191879281],
    [0.00000187376, 6.19888809652, 149.28574975631],
    [0.00000153285, 1.88338215978, 17.28229033479],
    [0.00000161572, 5.03486059863, 264.2610032857],
    [0.0000018582, 1.04769820785, 76.3980141745],
    [0.00000181668, 4.68053051052, 455.1531840108],
    [0.00000175514, 2.84020133855, 333.4135275605],
    [0.00000157908, 5.70734619944, 82.4477795923],
    [0.00000169475, 4.34257763319, 454.6655490438],
    [0.00000196145, 5.63627762153, 291.4602132442],
    [0.0000017797, 5.10767427277, 685.2301198692],
    [0.00000137738, 5.22315408886, 448.9334088873],
    [0.0000015262, 3.60399534591, 234.149840741],
    [0.00000137407, 2.06690682589, 16.9185920399],
    [0.00000150365, 6.22507689893, 294.91679362781],
    [0.00000131039, 3.99587345412, 156.3992967571],
    [0.00000180038, 3.58352924163, 103.3365917021],
    [0.00000129725, 6.13605280603, 76.72233708021],
    [0.00000142122, 4.21177012685, 224.1009782184],
    [0.00000128982, 0.15395575367, 130.6845595069],
    [0.00000146399, 4.63496132213, 334.5343019739],
    [0.00000177104, 3.17890757818, 10213.5293636945],
    [0.00000129816, 4.7166183626, 92.5515238691],
    [0.00000171451, 4.58548960528, 156.02678974161],
    [0.00000155457, 5.73264918423, 347.6406215621],
    [0.00000134222, 2.12839585652, 67.60305250931],
    [0.00000167287, 5.44444937854, 80.7575562073],
    [0.00000126618, 4.54441723736, 55.9029609396],
    [0.00000127892, 1.2041225115, 61.6920939265],
    [0.00000146027, 6.2070036841, 174.1860370063],
    [0.00000143517, 3.15339611893, 23.87457247379],
    [0.00000139674, 6.08093937474, 286.8400387805],
    [0.00000114667, 3.63547708752, 13.0895046408],
    [0.00000114401, 1.06004300555, 692.34366686999],
    [0.00000139103, 0.34979944278, 120.6020670895],
    [0.00000124306, 2.81921095084, 111.18634401329],
    [0.00000121491, 0.17904284099, 79.6912824968],
    [0.0000010672, 0.32743265674, 67.1611095246],
    [0.00000124445, 1.20141389812, 141.8970161096],
    [0.00000150445, 3.19975890072, 77.5067265004],
    [0.00000128748, 1.88192968286, 254.6997757301],
    [0.00000135145, 2.72523252904, 171.8984151459],
    [0.00000125741, 5.43013824571, 98.6012892869],
    [0.0000010686, 1.67581101594, 375.6362830283],
    [0.00000128791, 3.1089975476, 155.7449054513],
    [0.00000104092, 1.66738591591, 54.5785469257],
    [0.00000142443, 6.18206932531, 203.9816853659],
    [0.00000109153, 3.31853315915, 1.20702533],
    [0.00000111788, 3.20988788864, 272.85902299479],
    [0.00000125849, 0.73952694764, 182.998997164],
    [0.00000128119, 1.25401600728, 256.78375799],
    [0.00000101034, 1.92789553777, 363.1061100561],
    [0.00000104496, 5.98306685829, 131.16013238639],
    [0.00000135112, 5.89965158304, 629.0954035336],
    [0.0000009607, 0.96004206819, 258.6319289932],
    [0.00000102131, 0.32621877592, 88.35873817511],
    [0.00000101524, 2.58765430562, 51.44954281471],
    [0.00000114745, 5.56311265795, 633.0275567967],
    [0.00000105009, 1.08881999355, 105.7360881471],
    [0.00000106158, 4.21108150573, 302.3391571693],
    [0.00000114559, 2.79618530706, 604.7163811454],
    [0.00000097687, 3.08538191339, 77.0311536209],
    [0.00000092981, 3.37398230043, 94.147871162],
    [0.00000092956, 3.04748798907, 43.5328466618],
    [0.0000009912, 0.3871998596, 149.5463821872],
    [0.00000116555, 3.87240492076, 85.58348134769],
    [0.00000089934, 4.5272214776, 149.85519872791],
    [0.00000089708, 4.7031569753, 217.4750661846],
    [0.00000111015, 0.47609598811, 253.32717760639],
    [0.00000092676, 1.28379383832, 267.22994870229],
    [0.00000111165, 3.60094431144, 19.8875374565],
    [0.00000089583, 2.61632627473, 295.4380584896],
    [0.00000089934, 1.93336144673, 149.7588305083],
    [0.00000089829, 0.03255236313, 529.44714761109],
    [0.00000104822, 0.00646324626, 433.9555553603],
    [0.00000097705, 6.1810602004, 1052.51220067191],
    [0.00000107796, 1.21569499408, 100.6282787164],
    [0.00000087921, 5.89750281232, 74.3922766044],
    [0.00000087921, 1.92349227727, 75.65855549721],
    [0.00000086241, 6.1014293879, 76.6699474535],
    [0.0000011596, 2.63074702292, 1214.92108496379],
    [0.00000112324, 0.51418420733, 229.0420313103],
    [0.00000092049, 5.96349988177, 6.86972951729],
    [0.0000010686, 3.13973519271, 81.9265147305],
    [0.00000082022, 1.12030839416, 82.889722577],
    [0.0000008348, 4.54952756372, 149.9670733125],
    [0.00000081598, 4.72010043651, 146.3504342345],
    [0.00000091518, 0.69706776322, 150.8038523594],
    [0.0000007895, 3.66249859834, 4.8639919472],
    [0.0000010795, 0.01759566775, 1162.7185218913],
    [0.00000080076, 2.03790828937, 73.38088464811],
    [0.00000093643, 2.41659050778, 99.1438060081],
    [0.0000009912, 6.07338306473, 150.06764704901],
    [0.00000082453, 1.09950958918, 7.14491616321],
    [0.00000076677, 1.12697999111, 73.80157577341],
    [0.00000075891, 1.3885355821, 219.171987214],
    [0.00000074887, 0.96555468752, 6.8360996225],
    [0.00000102486, 4.6932751139, 210.5739675049],
    [0.00000100859, 0.96653178552, 219.6475600935],
    [0.0000008348, 1.91105536061, 149.6469559237],
    [0.0000008397, 4.8563081763, 371.1828649034],
    [0.00000077201, 1.59554506373, 26.2673712744],
    [0.00000073643, 6.15300341975, 95.47228517591],
    [0.00000102191, 5.80314332396, 328.1087761737],
    [0.00000080117, 1.27552322935, 142.3846510766],
    [0.00000080972, 2.05291971561, 67.1154175423],
    [0.00000071543, 3.15877821167, 189.47940471839],
    [0.00000082381, 5.7761377719, 58.3506414944],
    [0.00000090613, 6.1799984853, 17.0216579039],
    [0.00000082892, 3.21408807945, 175.40987728371],
    [0.00000069078, 0.6836433972, 119.7507338276],
    [0.00000077925, 6.13231295495, 191.45151239371],
    [0.00000078846, 0.01322136724, 262.72164882321],
    [0.00000087497, 0.06139857943, 894.5970620441],
    [0.00000070199, 4.4102570721, 819.8154634768],
    [0.00000068577, 3.42724370622, 15.7978176265],
    [0.00000076274, 3.4224099518, 180.51768671441],
    [0.00000067854, 0.81718753405, 606.5163680388],
    [0.00000077388, 4.76490704968, 310.41591201661],
    [0.00000065829, 5.89081437901, 75.8285652029],
    [0.00000065829, 1.93018071058, 74.2222668987],
    [0.00000078426, 5.4122491113, 50.9070260935],
    [0.00000071406, 6.22865606356, 12.28635548869],
    [0.00000077423, 1.46638312463, 70.2901136356],
    [0.00000069368, 3.96790790686, 1066.7392946735],
    [0.00000080391, 4.69665260602, 16.7061437188],
    [0.00000085613, 4.60014385205, 173.9254045754],
    [0.00000072675, 1.00235377097, 44.48150029329],
    [0.00000084563, 3.52774210442, 55.4153259726],
    [0.00000062255, 0.31856134826, 209.6107596584],
    [0.00000084357, 0.35171178066, 331.56535655731],
    [0.00000070498, 4.37183477775, 76.62176334371],
    [0.00000079016, 2.29035112753, 477.5600987237],
    [0.00000082673, 3.24272077192, 480.52904414029],
    [0.00000082513, 0.02775890883, 192.448350135],
    [0.00000080452, 2.41833994886, 333.0498292656],
    [0.00000058904, 0.47702801943, 24.6228398717],
    [0.00000072407, 2.95570874153, 909.5749155711],
    [0.00000076612, 4.19475982131, 82.7296638826],
    [0.0000007551, 3.63824154759, 67.32116821901],
    [0.00000075555, 4.2382447948, 15.7429358723],
    [0.00000070086, 2.85435934542, 167.9662618828],
    [0.00000077989, 3.27374124663, 70.35954960481],
    [0.00000066531, 4.4406954785, 61.5320352321],
    [0.00000064336, 1.38579260364, 178.5455790391],
    [0.00000056673, 4.77020753909, 106.5179854398],
    [0.0000007764, 3.0632856201, 71.4020793284],
    [0.00000062431, 1.58038361055, 25.3590451821],
    [0.00000066444, 1.53111301715, 125.42799222991],
    [0.00000056738, 5.9751650972, 67.424234083],
    [0.00000055917, 4.46821485097, 949.4194264533],
    [0.00000076032, 4.77182769338, 60.52313540329],
    [0.00000059, 0.40199703694, 402.77850015639],
    [0.00000073138, 5.40480984208, 26.84351789039],
    [0.00000054636, 1.47333332256, 72.10465474401],
    [0.0000006461, 4.53004325815, 471.9310244312],
    [0.00000053942, 4.57598306501, 117.6667515677],
    [0.00000054371, 3.70705139945, 341.01470952831],
    [0.00000054836, 6.00184655368, 3.42521122121],
    [0.00000072732, 4.75709331353, 78.6487527732],
    [0.00000069223, 6.00657895059, 8.10812400971],
    [0.00000070778, 0.72528535802, 237.4343003427],
    [0.00000053991, 4.58226336725, 149.05625509271],
    [0.00000051866, 0.06447646319, 77.9461773576],
    [0.0000006075, 0.05642817034, 79.76071846601],
    [0.00000069434, 1.15052233162, 256.296123023],
    [0.00000052587, 2.71406262711, 830.8611637407],
    [0.00000056127, 4.11138293624, 65.6242471896],
    [0.00000053925, 2.05138349837, 13.73719830221],
    [0.00000050216, 5.16661515376, 195.38366565681],
    [0.00000057142, 2.07134229657, 31.8964455669],
    [0.00000055249, 1.26051053222, 75.3979230663],
    [0.00000055249, 0.27729925019, 74.6529090353],
    [0.00000049301, 0.68505345474, 76.2492563282],
    [0.00000060539, 0.62920341226, 289.97574053589],
    [0.00000064921, 3.42395602826, 846.3266522347],
    [0.00000059034, 3.72320060052, 27.3311528574],
    [0.00000051079, 1.42491352478, 0.3556920681],
    [0.00000051079, 4.8582717824, 0.1319428989],
    [0.00000056906, 1.59844453309, 143.21473247911],
    [0.00000051926, 4.71905052001, 185.2317372702],
    [0.00000048626, 2.61494512788, 49.1619209543],
    [0.00000051388, 2.81765408295, 42.88515300039],
    [0.00000064661, 5.92230270405, 910.0625505381],
    [0.00000048885, 2.2832679462, 91.70019060721],
    [0.0000005013, 2.68135977613, 102.11275142471],
    [0.0000004759, 4.15725769893, 224.4767386008],
    [0.00000057461, 1.13975618226, 303.6178792009],
    [0.00000050603, 4.72637033906, 35.18090516859],
    [0.00000048745, 2.56799692881, 201.01273994931],
    [0.00000058382, 1.14571117545, 486.1581184328],
    [0.00000049531, 1.94026883146, 44.96913526031],
    [0.00000054462, 1.20363826712, 237.11878615761],
    [0.00000054466, 4.07199773375, 75.6798073566],
    [0.00000054466, 3.74899735584, 74.37102474501],
    [0.00000060438, 1.89700849107, 266.233110961],
    [0.00000048443, 0.85823284795, 178.11819026941],
    [0.00000055698, 2.09947437284, 278.76328393321],
    [0.00000044294, 5.09757382517, 57.75994066341],
    [0.00000048861, 0.49608314902, 122.71967924421],
    [0.00000046778, 4.391282386, 14.47091148511],
    [0.00000052405, 1.63380007153, 58.9837809408],
    [0.00000047669, 3.70988562108, 84.42658491201],
    [0.00000059409, 4.21497001188, 117.6118698135],
    [0.00000042464, 1.91841049036, 150.5577741435],
    [0.00000042527, 5.16925942986, 69.3963417583],
    [0.00000044136, 4.05039656128, 554.31380496631],
    [0.00000056899, 2.10899559438, 25.3041634279],
    [0.0000005344, 4.60001445986, 275.3067035496],
    [0.00000048371, 1.92839725116, 56.01483552421],
    [0.00000051224, 4.05673094488, 1364.4842820984],
    [0.00000044203, 6.0748294433, 70.8326303568],
    [0.00000041205, 4.61128278499, 124.2590337067],
    [0.00000041202, 2.82827687638, 49.47743513939],
    [0.00000053218, 1.9762039227, 7.4604303483],
    [0.00000039879, 3.39793772882, 48.51422729289],
    [0.00000039626, 3.19265463758, 72.73779419041],
    [0.00000042269, 4.84099240112, 232.66536803271],
    [0.00000039724, 3.77191165523, 88.5187968695],
    [0.00000054178, 5.970296013, 364.7573391032],
    [0.00000047398, 0.63156941487, 74.1740827889],
    [0.00000047398, 0.90624036754, 75.87674931271],
    [0.00000045255, 3.53774254616, 393.2172726008],
    [0.00000041021, 1.74616565416, 79.2182017448],
    [0.00000040961, 2.22598462877, 306.58682461749],
    [0.00000048986, 1.09858650309, 198.0774244275],
    [0.00000042523, 4.44089809382, 22.3900997655],
    [0.00000037414, 2.6449672978, 397.14942586389],
    [0.00000043272, 4.0824809185, 28.32799059869],
    [0.00000047477, 0.90974768312, 224.70048777],
    [0.00000047665, 5.6322109028, 73.3284950214],
    [0.00000040139, 4.02740827147, 164.78486814511],
    [0.0000003777, 0.39022145039, 91.48774228611],
    [0.00000037294, 5.02963292331, 275.7943385166],
    [0.00000039829, 3.0738878391, 28.98238190449],
    [0.00000042462, 1.60057894892, 25.61967761299],
    [0.00000038602, 1.73856338598, 91.8032564712],
    [0.00000049996, 4.52551797919, 52.13086637091],
    [0.0000003712, 3.30294172342, 167.3331224364],
    [0.00000035657, 4.61504038625, 77.3130379112],
    [0.00000046968, 5.66194598133, 836.2777897121],
    [0.0000003677, 6.23330863408, 123.78346082721],
    [0.00000045438, 0.21594288443, 199.040632274],
    [0.00000048093, 6.20387971062, 3340.8562441833],
    [0.00000034133, 5.28355572528, 154.91482404881],
    [0.00000040987, 5.00683283281, 411.3765198655],
    [0.00000037167, 6.06382239637, 227.03629374021],
    [0.00000035365, 5.35602526661, 183.85033042589],
    [0.00000034349, 1.22331331983, 58.5630898155],
    [0.00000044963, 4.68970697967, 833.30884429549],
    [0.00000033485, 1.71788340603, 227.77000692311],
    [0.00000032838, 2.9323257066, 69.12115511239],
    [0.00000037229, 2.21578270703, 103.7639804718],
    [0.00000033396, 2.69897029979, 92.2908914382],
    [0.00000043914, 1.40663545062, 293.4323209195],
    [0.00000044941, 1.33050790583, 292.9446859525],
    [0.00000037327, 3.07443834918, 0.55933166859],
    [0.00000032513, 0.07648721797, 136.3136337994],
    [0.00000034574, 0.03012597295, 35.9291725665],
    [0.00000041936, 3.73124645338, 92.0638889021],
    [0.00000033257, 1.06857797769, 248.9676355736],
    [0.00000044206, 1.31564656912, 767.61290040431],
    [0.00000033118, 2.87749681035, 284.39235822571],
    [0.00000034173, 0.10260218436, 133.13224006171],
    [0.00000035868, 0.01050739027, 179.9181771628],
    [0.00000037508, 5.59184408484, 94.6691360238],
    [0.00000041561, 3.77043120506, 163.82166029861],
    [0.00000034188, 3.60117869846, 336.01877468221],
    [0.00000033991, 0.79141238881, 32.4389622881],
    [0.00000030436, 5.913045255, 31.7845709823],
    [0.00000034876, 1.56285963223, 215.1941419686],
    [0.00000037259, 6.20129626897, 91.06705116081],
    [0.00000030353, 0.09307819419, 32.48714639791],
    [0.00000031931, 0.43513268629, 205.9417309537],
    [0.00000030008, 2.49973464553, 745.03386490949],
    [0.00000036558, 2.58993639058, 45.9659730016],
    [0.00000029428, 0.8972324024, 270.1652642241],
    [0.00000036881, 4.37161776762, 75.6161168818],
    [0.00000036881, 3.44937732197, 74.43471521981],
    [0.00000039559, 1.15354419544, 58.87190635621],
    [0.00000038377, 0.95780009117, 39.3736908626],
    [0.00000032329, 2.26521239763, 80.65449034331],
    [0.00000040007, 0.14301803428, 1744.6120500584],
    [0.00000029388, 0.57900535447, 530.89799042461],
    [0.00000031193, 5.34416408985, 9.1506537333],
    [0.00000034894, 4.92668697632, 143.5872394946],
    [0.00000029512, 6.1062974066, 958.33296034749],
    [0.00000029255, 2.41173436056, 415.7963080956],
    [0.00000029888, 5.08597902881, 163.1403367424],
    [0.00000032864, 5.8914614824, 94.0359965774],
    [0.00000035403, 1.3028279937, 31.73638687251],
    [0.00000036501, 0.77005331472, 142.9059159384],
    [0.00000032416, 1.28513183872, 114.6978061511],
    [0.00000028338, 3.75891762209, 528.9715747316],
    [0.0000003116, 5.81959220361, 118.15438653471],
    [0.00000034324, 5.62039019983, 57.3874336479],
    [0.00000033749, 5.83827641206, 42.78208713641],
    [0.00000034375, 0.7826766379, 326.62430346539],
    [0.00000029984, 0.0328185745, 90.52453443961],
    [0.00000035105, 0.74094997285, 230.8083883089],
    [0.00000031999, 5.07107605631, 216.51185833811],
    [0.00000030853, 2.28294479233, 8.84183719261],
    [0.00000034254, 5.04640211853, 228.83628063359],
    [0.00000027044, 3.03125650197, 27.96429230381],
    [0.00000027412, 4.7440745156, 221.40721944771],
    [0.00000026388, 4.77835419912, 45.82046852221],
    [0.00000032494, 1.78574998112, 1033.1145589148],
    [0.00000035994, 4.20173334239, 4.49148493169],
    [0.00000029345, 5.38380888199, 123.2958258602],
    [0.00000026034, 5.84327450882, 78.4699343469],
    [0.0000002665, 4.89722523811, 151.5039356475],
    [0.0000003103, 3.60400127791, 66.42739634171],
    [0.00000028238, 5.31937121882, 222.6165055101],
    [0.00000026518, 4.41892897104, 11.401392332],
    [0.00000026014, 6.23229383455, 447.448936179],
    [0.00000025836, 5.11134834182, 68.5450084964],
    [0.00000024852, 2.56533658439, 42.997027585],
    [0.00000033654, 0.21042031029, 54.5303628159],
    [0.00000024448, 0.97333931967, 269.6776292571],
    [0.0000003319, 1.90416729889, 141.9427080919],
    [0.00000024034, 4.76114773513, 327.9969015891],
    [0.00000031856, 0.25852732885, 1140.1394863965],
    [0.00000026275, 5.82738497494, 39.9162075838],
    [0.00000025887, 1.29578545514, 2.0438043769],
    [0.00000023665, 3.67797605271, 21.84758304429],
    [0.00000025701, 5.62367875742, 73.91345035801],
    [0.00000025701, 2.19731633217, 76.1373817436],
    [0.00000024158, 0.24782459423, 4.2096006414],
    [0.00000032085, 0.52321152462, 368.21391948681],
    [0.00000025732, 5.22545182629, 3.37951923889],
    [0.0000002427, 5.33004436579, 130.1969245399],
    [0.00000023775, 4.38064538443, 969.37866061139],
    [0.00000022911, 1.37498134, 117.5636857037],
    [0.00000027148, 1.36880911424, 11.1776431628],
    [0.0000003142, 4.91847220813, 619.046541011],
    [0.00000030627, 0.38544249631, 91.1789257454],
    [0.00000029507, 1.92973953754, 565.35950523021],
    [0.00000025369, 1.20472379976, 81.13006322279],
    [0.00000027172, 4.46412260278, 25.516611749],
    [0.00000026354, 4.80557558326, 204.97852310719],
    [0.00000022571, 3.73766875284, 70.88081446661],
    [0.00000022904, 2.70921472298, 81.50582360521],
    [0.00000030825, 3.4094102763, 1439.75351563271],
    [0.00000025426, 3.23853983642, 133.34468838281],
    [0.00000027083, 5.66221904271, 105.0816968413],
    [0.00000023195, 5.23000166632, 90.57941619379],
    [0.00000022062, 1.70024849278, 189.1638905333],
    [0.00000022242, 0.3104236177, 86.1829908993],
    [0.00000023869, 5.80511989792, 413.8242004203],
    [0.0000002182, 5.43668576549, 34.86539098351],
    [0.00000029143, 3.98193402828, 616.07759559439],
    [0.00000026632, 5.5622988582, 100.8889111473],
    [0.00000023677, 2.06825442969, 541.2959970271],
    [0.00000030371, 6.14019922693, 401.4059020327],
    [0.00000023717, 5.53655558593, 45.7992166628],
    [0.00000027663, 2.55223795831, 405.747445573],
    [0.00000024084, 4.27906130982, 170.41394243761],
    [0.00000025601, 2.80411540512, 31.24875190549],
    [0.00000022288, 2.3659379864, 108.1625168425],
    [0.00000022857, 3.2972434484, 104.2303635794],
    [0.00000028908, 1.50679345449, 329.593248882],
    [0.0000002443, 0.22851414496, 49.42255338521],
    [0.00000023008, 3.64071080504, 217.16624964391],
    [0.00000020835, 0.36990037219, 141.208994909],
    [0.00000022817, 3.61760173513, 145.387226388],
    [0.00000020957, 4.08353082157, 79.170017635],
    [0.00000027954, 2.22651254688, 68.17250148091],
    [0.00000023022, 5.92938841563, 162.6527017754],
    [0.00000025411, 5.76699581868, 41.8883152591],
    [0.00000025079, 2.20069442464, 92.66339845371],
    [0.00000022779, 5.52671292313, 107.74182571721],
    [0.00000025092, 5.30025519045, 87.87110320809],
    [0.00000027016, 2.72752005167, 0.9945770089],
    [0.00000020414, 5.00634045533, 222.14093263061],
    [0.00000020185, 1.39247008619, 144.1779403256],
    [0.00000027094, 2.53571464342, 369.6983921951],
    [0.00000019466, 0.94793502304, 9.1573513777],
    [0.00000020822, 2.59012459788, 72.31710306511],
    [0.00000020822, 5.23087049171, 77.73372903651],
    [0.00000023312, 4.27157982827, 52.3914988018],
    [0.00000019238, 3.43567333582, 145.1411481721],
    [0.00000022156, 0.30949345254, 64.73047531231],
    [0.00000019648, 5.7350241184, 692.831301837],
    [0.00000018748, 2.81185581123, 289.8089841971],
    [0.00000019125, 6.24717703663, 22.6507321964],
    [0.00000024581, 4.62574787093, 20.20305164159],
    [0.00000021617, 1.70409750584, 251.8427048981],
    [0.0000002186, 3.58883523958, 38.11622069041],
    [0.00000021658, 1.25465688439, 30.9881194746],
    [0.00000021231, 2.27353854359, 55.38169607781],
    [0.00000025483, 4.64764517239, 41.08516610701],
    [0.00000021046, 0.38705533625, 58.0754548485],
    [0.00000022854, 1.45857912338, 167.07249000551],
    [0.00000018322, 4.94540136145, 165.8486497281],
    [0.00000018466, 5.32494059479, 380.847158323],
    [0.00000024739, 5.59448807386, 81.8783306207],
    [0.00000022782, 3.12770425841, 305.5899868762],
    [0.00000018449, 2.2091846822, 378.92074262999],
    [0.00000020493, 2.671653322, 148.21066732521],
    [0.00000024545, 3.35975251109, 66.4610262365],
    [0.00000020079, 4.42522434046, 156.9205616189],
    [0.00000017465, 2.28393103769, 312.21589891],
    [0.00000021567, 1.12414642509, 225.5518210319],
    [0.0000002003, 3.79354487434, 134.30789622931],
    [0.00000017391, 4.43131947107, 73.0196784807],
    [0.00000019537, 2.39762567547, 140.4125434013],
    [0.00000022517, 0.52473596856, 248.70700314271],
    [0.00000017589, 0.35927102062, 303.3023650158],
    [0.00000020366, 3.56741326841, 97.65933329981],
    [0.00000022843, 2.3534400363, 758.5272457282],
    [0.00000021264, 1.64752588071, 330.080883849],
    [0.0000001698, 2.73160214009, 74.5678416638],
    [0.0000001698, 5.0893929495, 75.48299043781],
    [0.00000019715, 5.18582165447, 531.73476947149],
    [0.00000021989, 5.89750482501, 136.78920667889],
    [0.00000021616, 0.96280708434, 10.3263099009],
    [0.00000016752, 4.31140364382, 19.2543980101],
    [0.00000021941, 2.87264335658, 624.6756153035],
    [0.00000016246, 1.61745332834, 2119.00767786191],
    [0.00000016279, 4.16287111598, 1.12878064019],
    [0.00000016279, 1.02127846239, 1.61641560721],
    [0.00000022328, 3.27882453633, 97.9199657307],
    [0.00000019188, 4.94451945419, 14.3133449182],
    [0.00000022519, 0.85578283496, 165.3610147611],
    [0.00000020956, 1.59412571256, 330.9658470057],
    [0.00000018599, 5.83146793262, 148.4344164944],
    [0.00000018917, 2.54214892451, 255.2992852817],
    [0.00000021299, 1.30861186159, 95.52046928571],
    [0.00000019398, 0.43941419672, 408.19512612779],
    [0.0000002148, 4.04620670995, 1669.83045149109],
    [0.0000001573, 0.96946804568, 17.8817998864],
    [0.00000015989, 2.45562453742, 132.85705341579],
    [0.00000016213, 1.36728837925, 5.1728084879],
    [0.00000015494, 2.11918907538, 743.23387801611],
    [0.00000015346, 2.1315890096, 610.44852130189],
    [0.00000019338, 0.9605356001, 363.27286639489],
    [0.00000017882, 1.66188033865, 190.9089956725],
    [0.00000016009, 5.51847022593, 74.19533464831],
    [0.00000016009, 2.30252486366, 75.8554974533],
    [0.0000001845, 3.2225527627, 135.5799206165],
    [0.00000015066, 1.89059622287, 118.26626111931],
    [0.00000019811, 2.43871507941, 375.9517972134],
    [0.00000017887, 1.19130006535, 85.3203567893],
    [0.00000015552, 1.65433821047, 5.872891776],
    [0.00000015552, 1.65433821047, 5.385256809],
    [0.00000014946, 4.66006612006, 76.4617046493],
    [0.00000014946, 0.01933631594, 73.5891274523],
    [0.0000001866, 1.950919173, 107.2687449652],
    [0.00000014573, 3.69875469397, 73.4927592327],
    [0.00000014573, 0.98064774203, 76.55807286891],
    [0.00000015019, 0.65840143476, 64.0915903715],
    [0.00000017892, 2.82013610923, 231.8052260502],
    [0.00000015543, 3.30320904812, 66.118579801],
    [0.00000018436, 0.4789095633, 549.8940167362],
    [0.00000015371, 5.73614840902, 736.1203310153],
    [0.00000017668, 3.18092258141, 378.39947776819],
    [0.00000014688, 4.10270741432, 17.91542978119],
    [0.00000014089, 1.33160825911, 63.86784120231],
    [0.00000015759, 2.23574097001, 104.25161543881],
    [0.00000016874, 5.09404028824, 84.0990086394],
    [0.00000015468, 0.86301025949, 515.70768857651],
    [0.00000017006, 0.51683233019, 106.2573530089],
    [0.00000015683, 1.71904566531, 46.8173062635],
    [0.00000015035, 3.00271084463, 490.09027169589],
    [0.00000013767, 4.61271175472, 535.6669227346],
    [0.00000014034, 3.68802555946, 281.210964488],
    [0.00000013418, 3.63644963778, 70.02948120471],
    [0.00000013418, 4.18460952894, 80.0213508969],
    [0.00000018602, 1.68483266458, 366.24181181149],
    [0.00000016062, 2.15259310684, 73.28031091161],
    [0.00000016062, 2.52680932916, 76.77052119001],
    [0.00000018697, 4.3546783566, 130.1632946451],
    [0.0000001383, 5.82941711627, 278.2756489662],
    [0.00000016797, 3.58460178095, 157.5112624499],
    [0.00000016797, 0.44300912736, 157.0236274829],
    [0.00000013389, 0.37621077797, 118.6299594142],
    [0.00000014382, 2.64523963261, 194.5323323949],
    [0.0000001709, 5.34605161061, 60.79832204921],
    [0.00000013114, 4.17991617574, 883.5513617802],
    [0.00000016641, 0.22443011643, 118.3144452291],
    [0.00000013074, 4.16045920009, 12.2527255939],
    [0.00000013153, 2.76878972668, 225.10987804721],
    [0.00000013157, 4.80246349684, 122.08653979781],
    [0.00000016504, 0.88543342905, 285.35556607221],
    [0.00000013716, 1.39024809565, 1096.8504572182],
    [0.00000012748, 2.4841608752, 18.7667630431],
    [0.00000016958, 4.29317977301, 49.0018622599],
    [0.00000014158, 0.89623255371, 147.801277048],
    [0.00000014666, 4.09150859076, 0.50694204189],
    [0.00000016964, 4.64489049535, 64.9429236334],
    [0.00000016167, 0.81441085963, 176.894349992],
    [0.00000017434, 4.18185648024, 381.3684231848],
    [0.00000012702, 0.95868773338, 141.4550731249],
    [0.00000012494, 3.48097632144, 196.01680510321],
    [0.00000013527, 0.03173550378, 73.70100203691],
    [0.00000013527, 4.64766693222, 76.3498300647],
    [0.00000014805, 3.56965005519, 97.17169833279],
    [0.00000012844, 0.72145574815, 322.3678272966],
    [0.00000013194, 1.14309437857, 552.34169729099],
    [0.00000012712, 1.93345626951, 748.9660181726],
    [0.00000013959, 6.05671842797, 60.3563790645],
    [0.00000016442, 4.32045457497, 83.6234357599],
    [0.00000012305, 4.99419427175, 14.7340360435],
    [0.00000016319, 3.56734156984, 703.8770021009],
    [0.00000012524, 4.5601259855, 501.62360692681],
    [0.00000013101, 1.72098134216, 112.6708167216],
    [0.00000013451, 3.28134459176, 196.3805033981],
    [0.00000016729, 2.85149875163, 336.5949212982],
    [0.00000015662, 5.74090488191, 124.7466686737],
    [0.00000016361, 5.04073870288, 853.4401992355],
    [0.00000015016, 2.24876100706, 193.4115579815],
    [0.00000013452, 5.9844062071, 172.4409318671],
    [0.00000014832, 2.47767910416, 115.6061322434],
    [0.00000011802, 1.77590529063, 34.28713329129],
    [0.0000001164, 4.47571714689, 105.13657859549],
    [0.0000001233, 4.4934894556, 83.93225230061],
    [0.00000011536, 6.01601210702, 241.3664536058],
    [0.00000011526, 3.51836993689, 628.6077685666],
    [0.00000013571, 4.79339886213, 205.46615807421],
    [0.00000011579, 2.24790593657, 65.57606307981],
    [0.00000011468, 0.00191176159, 416.79314583689],
    [0.00000011443, 3.94479633517, 20.6906866086],
    [0.00000012105, 4.85907022662, 43.84836084689],
    [0.00000013131, 1.89137553565, 288.4912678276],
    [0.0000001405, 6.17885749061, 323.74923414091],
    [0.00000012885, 3.64902131797, 283.9047232587],
    [0.00000015266, 2.99363853985, 906.130397275],
    [0.0000001109, 3.73542178033, 56.11540926071],
    [0.00000015022, 0.00720412281, 438.0544649622],
    [0.0000001169, 6.00028447424, 256.18424843839],
    [0.00000010863, 3.14224264687, 230.0052391568],
    [0.00000010598, 5.07035234152, 11.6050319325],
    [0.00000010559, 0.1289449511, 466.5143984598],
    [0.0000001167, 5.99338710443, 308.93143930831],
    [0.00000014228, 3.18332327007, 85.10790846821],
    [0.0000001482, 2.60745843389, 154.0546820663],
    [0.00000011614, 2.42007432028, 140.90017836831],
    [0.00000012388, 3.5203086941, 1171.63205578549],
    [0.0000001258, 2.08601686331, 114.1216595351],
    [0.00000012667, 4.44809124758, 38.85242600079],
    [0.00000012598, 5.43444858317, 1819.3936486257],
    [0.0000001326, 4.20791801425, 77.7191748215],
    [0.00000014442, 4.27374278803, 82.24202891559],
    [0.00000013709, 3.5470387469, 109.0687318586],
    [0.00000010566, 6.07201741563, 1107.8961574821],
    [0.00000012906, 0.41462458624, 757.5640378817],
    [0.00000012022, 5.10417154765, 207.6386519831],
    [0.00000011539, 0.97518052335, 75.5948650224],
    [0.00000011539, 0.56262925906, 74.45596707921],
    [0.00000010478, 3.97956030158, 72.090100529],
    [0.00000013623, 2.7750284336, 406.3469551246],
    [0.00000010221, 5.18369595497, 66.6734745576],
    [0.000000134, 5.08609743155, 25.8466801491],
    [0.00000012805, 3.30229416427, 124.5342203526],
    [0.00000010035, 2.18243817807, 82.6145359311],
    [0.00000009987, 2.36226793901, 115.1854411181],
    [0.00000010797, 4.34736910404, 199.3158189199],
    [0.00000009996, 5.23327380756, 59.038662695],
    [0.00000010812, 2.03480650379, 89.2525100524],
    [0.00000013348, 5.29214999926, 139.7581520955],
    [0.00000012606, 4.27203364948, 28.5549931348],
    [0.00000009781, 5.57308917944, 84.47476902181],
    [0.00000009902, 0.05888868084, 262.77653057739],
    [0.00000010352, 2.38232189099, 361.62163734781],
    [0.00000010581, 3.71988895032, 679.8134938978],
    [0.00000010976, 6.13965346235, 209.0894947966],
    [0.00000011881, 3.72150920911, 827.67977000299],
    [0.00000010568, 2.60664396849, 177.0611063308],
    [0.00000011169, 1.62829652213, 318.43567403349],
    [0.00000010655, 5.22088985892, 264.2061215315],
    [0.00000010248, 3.29930797837, 65.63094483399],
    [0.00000009768, 4.02937576762, 422.42222012939],
    [0.00000011423, 5.09245873399, 679.4979797127],
    [0.00000011319, 1.06014170278, 43.79347909271],
    [0.00000010444, 3.652921099, 64.2403482178],
    [0.00000010733, 1.76427675291, 89.6944530371],
    [0.00000009435, 4.23041304178, 59.83511420271],
    [0.00000010593, 4.05752516876, 71.9445960496],
    [0.00000010332, 3.41106834601, 61.0444002651],
    [0.00000010962, 3.68227156047, 526.00262931501],
    [0.00000011184, 4.54016329366, 150.6101637702],
    [0.00000010812, 2.19768748461, 546.71262299849],
    [0.00000010427, 5.03449006418, 106.0303504728],
    [0.00000009926, 4.82121666504, 767.1252654373],
    [0.00000012114, 0.65339570824, 404.86248241631],
    [0.00000009406, 1.01182317286, 69.5564004527],
    [0.00000009406, 0.52598660955, 80.4944316489],
    [0.00000010953, 1.50406511728, 57.86300652739],
    [0.00000012472, 1.85646878831, 337.5581291447],
    [0.000000093, 1.19008258747, 831.3487987077],
    [0.00000010211, 3.49614631238, 544.1618765797],
    [0.00000009945, 4.38409935647, 192.935985102],
    [0.0000001125, 4.00375643631, 544.2649424437],
    [0.00000009524, 2.76840570335, 217.68751450571],
    [0.00000008854, 4.52273760683, 210.36151918381],
    [0.00000010193, 1.28740045689, 443.6198487799],
    [0.00000009954, 0.40697067708, 79.8513411912],
    [0.00000009954, 1.13082001641, 70.1994909104],
    [0.0000000993, 2.19978678204, 63.0165079404],
    [0.0000000865, 3.04198602011, 533.1161763158],
    [0.00000010719, 1.14850073361, 399.9214293244],
    [0.00000012021, 0.4531072194, 54.89406111079],
    [0.0000001105, 6.08929460929, 210.60759739969],
    [0.00000010384, 2.71667758871, 30.3549800282],
    [0.00000010014, 4.63045642556, 419.2408263917],
    [0.00000011868, 4.54047117988, 353.5448825005],
    [0.000000115, 1.83332132826, 402.89037474099],
    [0.00000010255, 0.01704274302, 30.9332377204],
    [0.00000008996, 4.6691346318, 179.0332140061],
    [0.00000011583, 5.6998588986, 754.5950924651],
    [0.00000010299, 3.14377404278, 112.8978192577],
    [0.00000008391, 0.26029466491, 231.1808953244],
    [0.00000009702, 2.796143382, 181.03895157621],
    [0.00000008169, 6.13604295471, 674.1844196053],
    [0.0000000958, 0.13644851421, 292.2566647519],
    [0.00000008174, 3.07915003163, 121.59890483079],
    [0.00000010408, 0.5423732739, 533.8669358412],
    [0.00000009226, 0.54709114702, 74.1103923141],
    [0.00000009226, 0.99071863539, 75.94043978751],
    [0.00000008015, 1.33546656788, 350.5759370839],
    [0.0000000933, 1.56226315938, 53.0458901076],
    [0.00000009204, 3.60245234214, 223.6254053389],
    [0.00000008485, 3.911737413, 212.579705075],
    [0.00000008003, 5.62485208216, 1022.0688586509],
    [0.00000008044, 2.40245968826, 77.361222021],
    [0.00000008044, 5.41853540133, 72.68961008061],
    [0.00000010452, 0.41418724093, 841.9068640046],
    [0.00000007961, 3.88224898072, 43.3727879674],
    [0.00000008333, 2.7542168388, 152.09463647851],
    [0.00000009216, 0.57128331684, 670.2522663422],
    [0.00000009064, 0.56424328108, 153.4303513405],
    [0.00000007893, 4.08557344211, 93.9354228409],
    [0.00000009501, 5.55196701361, 156.7081132978],
    [0.00000009347, 1.91675181106, 157.22937815961],
    [0.00000008617, 4.16810964272, 85.8104838838],
    [0.00000007939, 3.63926584848, 109.2262984255],
    [0.00000008607, 6.26788179913, 63.17656663481],
    [0.00000010579, 6.03372568697, 17.76992530181],
    [0.00000007543, 4.71193192925, 77.2606482845],
    [0.00000007543, 6.25065581393, 72.79018381711],
    [0.00000008486, 4.73310682076, 78.106236052],
    [0.00000009532, 3.48105051561, 835.28095197081],
    [0.00000007509, 0.24778282724, 216.72430665921],
    [0.00000008683, 1.33880616649, 117.77862615229],
    [0.00000007488, 3.66693161684, 90.2157178989],
    [0.00000009008, 3.17075001642, 175.6705097146],
    [0.00000007543, 3.74071360489, 74.2917028679],
    [0.00000007543, 0.93868883111, 75.75912923371],
    [0.00000008913, 6.15081816716, 683.74564716089],
    [0.0000000828, 3.88721456088, 216.2366716922],
    [0.00000010165, 1.03073080986, 1364.9719170654],
    [0.00000007591, 1.52968766452, 351.5727748252],
    [0.00000008205, 5.09744900361, 37.4136452748],
    [0.00000007588, 4.85567964296, 198.5650593945],
    [0.00000008473, 4.68984634698, 71.2533214821],
    [0.00000008473, 3.13114874261, 78.79751061951],
    [0.00000009107, 4.67464118916, 37.15301284391],
    [0.00000007766, 5.62963711474, 1479.11039154791],
    [0.00000008403, 2.94304661637, 253.2153030218],
    [0.00000007642, 3.78920936733, 49.96507010641],
    [0.00000009234, 5.873284096, 166.84548746939],
    [0.00000008874, 1.21562855803, 483.4643596621],
    [0.00000007128, 5.26168401372, 173.6984020393],
    [0.00000007872, 4.40559016099, 437.8877086234],
    [0.00000009185, 3.56691829389, 101.04896984171],
    [0.00000007312, 1.42644648376, 526.7533888404],
    [0.00000009194, 0.24395127549, 97.4323307637],
    [0.00000008182, 4.10243639384, 115.8667646743],
    [0.00000009663, 4.58316566558, 763.1931121742],
    [0.00000008486, 5.36038512781, 242.11472100371],
    [0.00000008799, 1.82084099731, 366.7294467785],
    [0.00000008458, 0.01382575407, 297.9888049084],
    [0.00000008904, 3.41133622364, 60.2076212182],
    [0.00000007575, 1.04449883197, 214.506120768],
    [0.00000006999, 0.8957976607, 144.6992051874],
    [0.00000008, 2.06536324132, 325.1398307571],
    [0.00000008498, 5.46871328448, 20.7388707184],
    [0.00000009641, 2.324328836, 56.8997986809],
    [0.00000007094, 1.39205091254, 49.75262178531],
    [0.00000007954, 5.63302185515, 87.03432416121],
    [0.0000000697, 3.53190960252, 130.7964340915],
    [0.00000007608, 0.76489562356, 409.31590054121],
    [0.00000007168, 0.93279559301, 1265.81129610991],
    [0.00000008728, 1.96431386488, 78.99119920869],
    [0.00000007572, 1.74214777176, 148.9132427408],
    [0.00000006783, 1.46116350403, 555.3106427076],
    [0.00000008481, 2.96221922852, 119.2630988606],
    [0.00000007247, 4.39792712384, 33.26904369061],
    [0.00000006911, 4.10374012893, 41.5125548767],
    [0.00000006813, 1.07636826238, 301.17019864609],
    [0.0000000847, 5.65128185788, 250.191475851],
    [0.00000006549, 3.94896050121, 129.360145493],
    [0.00000006543, 1.39714714677, 44.3696257087],
    [0.00000008617, 4.71598219531, 150.70078649541],
    [0.00000007676, 0.12204540495, 60.46825364911],
    [0.00000008905, 1.60527300986, 749.82616015511],
    [0.00000007175, 0.91189106023, 445.96446347071],
    [0.00000006465, 3.89256895528, 75.50098893029],
    [0.00000007106, 5.68687043451, 6456.63624021419],
    [0.0000000722, 0.39640769723, 1692.40948698591],
    [0.00000006926, 5.63023317193, 20.9056270572],
    [0.00000007786, 1.14887986313, 100.4012761803],
    [0.00000006164, 3.36294623636, 1376.0176173293],
    [0.00000007312, 6.02023970623, 188.9032581024],
    [0.00000006788, 1.55308559495, 86.8742654668],
    [0.00000006246, 1.42620877338, 14.57397734909],
    [0.00000006057, 0.06309705992, 267.71758366931],
    [0.00000007767, 2.05936273306, 95.7354097343],
    [0.00000007632, 1.14078660914, 22.22334342671],
    [0.00000006881, 2.23862156704, 163.87654205279],
    [0.00000006523, 5.129800839, 368.83825021259],
    [0.00000006006, 5.77254836616, 560.9397170001],
    [0.00000006916, 4.01629596963, 497.69145366371],
    [0.00000007042, 2.46549785002, 39.1130584317],
    [0.00000007444, 1.82983001446, 396.785727569],
    [0.00000007949, 0.17119410374, 474.7030278917],
    [0.00000007441, 0.32295076565, 260.01333583751],
    [0.00000008032, 2.40925890235, 224.0673483236],
    [0.00000005746, 4.13473916751, 193.0478596866],
    [0.00000005743, 3.1957847183, 20201.98247923659],
    [0.00000007757, 2.22105969633, 688.41151360689],
    [0.00000007329, 5.57096867484, 237.17366791179],
    [0.00000005919, 5.22221186676, 17.39416491939],
    [0.00000006252, 0.31443956867, 132.16903221521],
    [0.0000000587, 2.71837669898, 690.8591941617],
    [0.00000006964, 1.45493516622, 197.5561595657],
    [0.00000007219, 3.8637679701, 266.9693162714],
    [0.00000007947, 4.04273198078, 514.46929408409],
    [0.00000007626, 5.24503341118, 842.3944989716],
    [0.00000006895, 3.0503723816, 425.35753565121],
    [0.00000006665, 1.38387522554, 436.5699922539],
    [0.00000006291, 0.10212516125, 343.49601997789],
    [0.0000000614, 2.78780439407, 213.7096692603],
    [0.00000005915, 2.43173952853, 62.75587550951],
    [0.00000005915, 5.38925556105, 87.2949565921],
    [0.00000006781, 5.62139692952, 647.25465079831],
    [0.00000006309, 4.56219828589, 178.3788227003],
    [0.00000005782, 1.65730371744, 401.2940274481],
    [0.00000007776, 0.40754452945, 204.9448932124],
    [0.00000006809, 2.65807547458, 291.9478482112],
    [0.0000000568, 2.60329405, 79.6455905145],
    [0.00000005958, 2.08802033162, 808.7697632129],
    [0.0000000585, 1.55616178293, 358.6526919312],
    [0.00000005624, 2.57073308836, 42.3090063844],
    [0.00000007759, 0.2690670778, 79.273083499],
    [0.00000005495, 2.40092261645, 159.2081834793],
    [0.00000005488, 3.62340702832, 293.95358578131],
    [0.00000007423, 0.60231124353, 139.72452220071],
    [0.0000000557, 4.40848654037, 187.9949320101],
    [0.00000006894, 4.85514543558, 407.8314278329],
    [0.00000005539, 3.27596723365, 1235.3679540889],
    [0.00000006394, 5.72210287246, 956.53297345411],
    [0.00000005577, 5.67561703294, 168.92946972931],
    [0.00000006276, 6.25873212243, 97.004941994],
    [0.00000007541, 2.51146519598, 303.87851163179],
    [0.00000006343, 0.19031564137, 164.36417701981],
    [0.00000006353, 5.36295948561, 370.2196570569],
    [0.0000000539, 1.55675166817, 818.0154765834],
    [0.00000005777, 4.25785415604, 271.3745502865],
    [0.00000006126, 0.94260816975, 45.2297676912],
    [0.00000005488, 3.66616025422, 136.47369249381],
    [0.00000006742, 4.40828850034, 89.84321088341],
    [0.00000006582, 0.85603229747, 1291.1871562394],
    [0.00000005219, 5.16576359992, 7.62048904269],
    [0.00000006692, 1.57725367967, 5994.75133850259],
    [0.00000006355, 5.81946862067, 184.48346987229],
    [0.00000007139, 2.55929105921, 359.173956793],
    [0.00000006215, 0.02868656789, 1582.2031657665],
    [0.00000005605, 3.11246665067, 43.484662552],
    [0.00000005449, 0.56711967932, 229.0969130645],
    [0.00000005787, 0.20970024792, 492.06237937121],
    [0.00000006553, 4.18583913829, 1065.35788782919],
    [0.0000000534, 4.29293326576, 27.4979091962],
    [0.00000005124, 2.2440492586, 479.532206399],
    [0.00000005421, 0.30923710851, 298.8825767857],
    [0.00000005261, 0.87883152563, 211.5708052462],
    [0.0000000642, 5.27556145965, 489.0934339546],
    [0.00000005889, 2.39433492737, 1514.5351142],
    [0.00000004956, 4.1447911401, 450.41788159561],
    [0.0000000645, 3.02138558238, 9924.96103472219],
    [0.0000000494, 0.52935323621, 20.953811167],
    [0.00000005847, 1.42358003244, 89.5825784525],
    [0.000000056, 3.40624847077, 241.8540885728],
    [0.00000006152, 4.92625022847, 524.5181566067],
    [0.00000006088, 2.72225507513, 711.6931245173],
    [0.00000005407, 3.68956638902, 148.1624832154],
    [0.00000006327, 3.36352822659, 300.6489337843],
    [0.0000000549, 0.79611377485, 261.81332273089],
    [0.0000000528, 5.56598623472, 74.4259064992],
    [0.00000004835, 5.88731588561, 122.77456099839],
    [0.00000005417, 3.67541639447, 34.1840674273],
    [0.00000005465, 5.75476347267, 49.8956341372],
    [0.00000004962, 3.25176869821, 40.49446527601],
    [0.00000005202, 3.43757897939, 102.27950776349],
    [0.00000005768, 0.87260894941, 237.9219353097],
    [0.00000005794, 0.10891997847, 215.99059347631],
    [0.00000006057, 1.62279256892, 1595.0488529238],
    [0.00000006144, 3.15358005008, 456.9531709042],
    [0.00000005439, 3.24285098245, 164.1371744837],
    [0.00000006169, 1.60041197456, 2199.5214165857],
    [0.00000005803, 3.65374412104, 476.07562601539],
    [0.00000004737, 0.78451360563, 905.64276230799],
    [0.00000004927, 1.6938896624, 752.8981714357],
    [0.00000004656, 0.34442537, 89.0949434855],
    [0.00000005228, 2.74942181286, 112.63718682681],
    [0.00000005103, 2.1593914175, 93.5483616104],
    [0.00000004793, 1.96914093772, 257.14745628489],
    [0.00000005517, 1.7281102856, 85.95924173011],
    [0.00000005174, 2.58855661317, 460.8853241673],
    [0.000000046, 3.3205395044, 693.82813957829],
    [0.00000005568, 0.53088329446, 346.1561488538],
    [0.0000000575, 4.66927784024, 475.11241816889],
    [0.00000005821, 3.92004054025, 331.9290548522],
    [0.00000005474, 2.88263190253, 119.0963425218],
    [0.00000005555, 3.07944899399, 166.58485503849],
    [0.00000004721, 5.57665667104, 818.33099076849],
    [0.00000004598, 3.62412165981, 155.43608891061],
    [0.00000004983, 1.00895911835, 305.3629843401],
    [0.00000004604, 0.67475144027, 240.6302482954],
    [0.00000004534, 2.5155363378, 426.3543733925],
    [0.0000000603, 4.20090275052, 928.22179780281],
    [0.00000005073, 3.12942565704, 119.151224276],
    [0.000000048, 3.95967152002, 133.82026126229],
    [0.00000005861, 0.80317428777, 441.51104534581],
    [0.00000004509, 3.96144988696, 106.67804413421],
    [0.0000000499, 1.91385887833, 53.40958840249],
    [0.00000005764, 2.06812354087, 896.08153475239],
    [0.00000005407, 3.17620848565, 469.48334387639],
    [0.00000005823, 2.53279154851, 29.5036467663],
    [0.00000005944, 1.8946619957, 235.9498276344],
    [0.00000006147, 6.16340894908, 1288.21821082279],
    [0.00000004598, 2.84824896257, 224.32798075451],
    [0.00000005709, 1.19300025955, 893.1125893358],
    [0.00000004523, 0.42084353764, 530.0948412725],
    [0.00000005024, 3.74456662203, 314.6635794648],
    [0.00000004527, 0.18441552056, 100.2982103163],
    [0.0000000451, 3.91932536657, 529.7747238837],
    [0.00000005026, 2.35475688005, 74.6496556684],
    [0.00000005303, 5.80155174455, 273.8222308413],
    [0.0000000438, 2.56083534926, 1578.2710125034],
    [0.00000005525, 5.57587445203, 453.1810763355],
    [0.00000004962, 5.09899961225, 810.90192958261],
    [0.00000004972, 4.91118746618, 334.89800026879],
    [0.00000005401, 0.36756701975, 193.6721904124],
    [0.00000005498, 5.42712164709, 230.58138577279],
    [0.00000004501, 1.13664286212, 523.71500745461],
    [0.00000004303, 1.61642146352, 1246.4136543528],
    [0.00000005261, 0.11599202303, 170.2538837432],
    [0.00000004481, 3.32785486855, 5.35162691421],
    [0.00000004655, 1.22893719366, 178.43370445449],
    [0.00000005029, 4.93286736415, 193.93282284329],
    [0.00000005743, 5.1319528573, 246.68001371321],
    [0.00000005652, 2.4369321169, 315.41184686271],
    [0.00000004604, 1.52839326823, 1072.47143483],
    [0.00000005494, 4.72792390506, 1044.6478941457],
    [0.00000004789, 2.23605317652, 361.7883936866],
    [0.00000005139, 3.92903030642, 223.20720634109],
    [0.0000000531, 5.0019408884, 444.4799907624],
    [0.00000004815, 2.88473476458, 3041.2422149471],
    [0.00000004119, 3.7058985461, 2120.4921505702],
    [0.00000004552, 5.13940535692, 158.5081001912],
    [0.00000004594, 5.3051322324, 1310.1495526562],
    [0.00000004173, 4.27937119249, 181.4026498711],
    [0.0000000409, 3.85142033448, 138.6494397696],
    [0.00000004884, 3.63854055554, 6.65728119619],
    [0.0000000474, 1.08537988908, 25788.53292982149],
    [0.00000005699, 4.42014972948, 772.8325844196],
    [0.00000005296, 6.13051223469, 694.7913474248],
    [0.00000004555, 1.54916256463, 154.42718908179],
    [0.00000004669, 0.25884741077, 127.8274886749],
    [0.00000004509, 0.11998259133, 227.3518079253],
    [0.00000004302, 4.07489237646, 100.0857619952],
    [0.00000004027, 2.46764881744, 294.0566516453],
    [0.00000004114, 1.36897521941, 383.0653442142],
    [0.00000004552, 1.51276211559, 1361.0397638023],
    [0.00000004653, 3.06693329591, 1019.5206043596],
    [0.00000004849, 1.52566036879, 119.1175943812],
    [0.00000004617, 3.3183125202, 887.4835150433],
    [0.00000005166, 5.64256709119, 49.26498681829],
    [0.00000005543, 0.97951125744, 296.50433220009],
    [0.00000003936, 3.52768574626, 137.79810650771],
    [0.00000003959, 5.50934383834, 151.1796127418],
    [0.00000004546, 2.33233821317, 44.42661853911],
    [0.00000004195, 6.00162241896, 305.2142264938],
    [0.00000003911, 0.86277832354, 1020.2688717575],
    [0.00000003906, 3.18695974498, 36.41929966101],
    [0.0000000498, 5.69236181156, 682.78243931439],
    [0.00000003894, 4.70455775456, 13.770828197],
    [0.00000004225, 3.79984325344, 310.73142620169],
    [0.00000003999, 0.85861235733, 93.98781246761],
    [0.00000003999, 0.67919742508, 56.063019634],
    [0.00000004072, 0.89973310426, 956.8484876392],
    [0.0000000416, 3.63151901615, 138.92807069299],
    [0.0000000387, 1.95474602032, 316.14805217309],
    [0.00000005282, 2.92111334017, 442.9955180541],
    [0.00000003856, 3.4118300159, 778.1709657012],
    [0.00000005026, 3.61371361415, 252.8997888367],
    [0.00000004872, 2.20405135166, 196.5929517192],
    [0.00000004088, 4.88665302875, 770.5818458209],
    [0.00000003976, 1.86804354686, 34.44469985821],
    [0.00000003976, 1.86804354686, 33.9570648912],
    [0.00000004425, 2.95639722479, 621.98185653281],
    [0.00000003827, 2.58907561634, 29.812463307],
    [0.00000004303, 3.92882697682, 302.3940389235],
    [0.00000004082, 1.367154106, 76.9854616386],
    [0.00000004775, 5.01224539274, 379.25961975071],
    [0.00000004866, 1.48866583048, 349.12509427039],
    [0.00000004558, 2.22201452659, 484.6736457245],
    [0.00000003896, 5.05170610646, 525.7419968841],
    [0.0000000379, 4.25929018143, 168.81759514471],
    [0.00000004584, 3.59480552867, 30.41197285861],
    [0.00000003789, 3.30651741587, 225.58545092669],
    [0.00000003919, 2.3005092251, 367.6144099352],
    [0.00000004495, 5.4922349697, 823.74761673989],
    [0.00000004071, 5.88966518721, 152.28832506769],
    [0.00000004431, 4.29789318653, 781.8399944059],
    [0.00000003787, 4.05895470835, 96.2230447013],
    [0.00000003738, 2.49934308138, 909.6867901557],
    [0.00000003824, 1.72982544585, 81.0181886382],
    [0.000000051, 1.77501816666, 786.47472308461],
    [0.00000004678, 3.46326949476, 294.42915866079],
    [0.00000004456, 0.2203282625, 473.4154971395],
    [0.00000004182, 4.89705342604, 109.9625037359],
    [0.00000004721, 3.16039895369, 487.6425911411],
    [0.00000004194, 2.53407050665, 135.8259988324],
    [0.0000000415, 5.59000281909, 208.6018598296],
    [0.00000003881, 4.75443738028, 527.4871020233],
    [0.00000005003, 4.37961745221, 26088.1469590577],
    [0.00000004925, 0.81517935481, 104.82106441041],
    [0.00000004629, 0.34855620937, 324.97307441831],
    [0.00000003764, 5.45647898824, 81.17575520511],
    [0.00000003764, 5.50610875494, 68.8750768965],
    [0.00000004634, 1.92952542549, 439.53893767049],
    [0.00000004661, 2.87667311621, 1031.63008620649],
    [0.00000004246, 0.02482008071, 290.8752579076],
    [0.00000004701, 2.63355711377, 292.572178937],
    [0.00000004168, 1.50787160276, 347.6888056719],
    [0.00000003574, 2.38256827172, 101.8521189938],
    [0.00000004316, 3.83309032671, 1034.5990316231],
    [0.00000004648, 6.16877789702, 701.01993126891],
    [0.00000005, 3.39683093071, 636.423890983],
    [0.0000000495, 0.01286873425, 901.71060904489],
    [0.00000004343, 2.34864924381, 372.77040347569],
    [0.00000003612, 5.08316127068, 154.3153144972],
    [0.0000000418, 2.96623594157, 304.99047732459],
    [0.00000003767, 0.18019206646, 1040.97886544099],
    [0.00000004105, 4.59107231627, 1169.5714364612],
    [0.00000004389, 1.49290014038, 67.6366824041],
    [0.0000000361, 2.89127345548, 969.86629557841],
    [0.00000003589, 0.27875915694, 1340.5928946772],
    [0.00000004184, 6.23478790622, 1575.08961876571],
    [0.00000004327, 5.64145082781, 470.44655172289],
    [0.00000003635, 3.93501297739, 618.0497032697],
    [0.00000004568, 3.41794989423, 374.46732450509],
    [0.00000004014, 1.70084166838, 191.07575201129],
    [0.00000003518, 1.411121675, 812.70191647599],
    [0.00000004543, 3.48436789856, 18.87863762769],
    [0.00000004255, 3.36331514891, 257.78059573129],
    [0.00000003536, 2.41329229079, 1158.78636862821],
    [0.00000004782, 5.54428360596, 20.363110336],
    [0.0000000358, 3.54221700449, 155.7997872055],
    [0.00000004461, 3.14107597585, 155.9116617901],
    [0.00000004866, 4.52211926632, 16.8549015651],
    [0.00000004353, 5.88270989811, 154.5423170333],
    [0.0000000377, 3.06440812943, 238.91877305099],
    [0.0000000378, 2.96795333847, 250.3582321898],
    [0.00000004854, 1.95565618643, 823.12328601411],
    [0.00000004833, 4.80754178031, 1894.66288216001],
    [0.00000003662, 6.11416816246, 319.92014674179],
    [0.00000003977, 0.97335262015, 326.1969146957],
    [0.00000003861, 4.17358736891, 47.9929624311],
    [0.00000004433, 0.7107415276, 1685.2959399851],
    [0.00000004182, 1.56605335566, 548.40954402789],
    [0.00000003421, 1.94916325782, 605.03189533049],
    [0.00000003876, 2.4228396874, 302.13340649259],
    [0.00000004008, 0.26728290195, 6137.20098863639],
    [0.000000045, 2.95199565386, 47.3049412305],
    [0.0000000405, 2.87043107244, 6.46359260701],
    [0.00000003411, 6.0286908307, 997.68983626269],
    [0.00000004312, 5.58120507194, 847.811124943],
    [0.00000003428, 6.26485948451, 71.3563873461],
    [0.00000003928, 1.52298026279, 395.3012548607],
    [0.0000000365, 4.95207182494, 1254.27796087899],
    [0.00000003844, 0.5768201924, 121.4958389668],
    [0.00000003966, 6.20228771414, 761.49619114479],
    [0.00000003497, 2.60162047401, 319.3294459108],
    [0.0000000351, 0.82870221909, 273.34665796181],
    [0.00000003408, 0.81896528567, 1016.3367184944],
    [0.00000004206, 2.08946991165, 435.44002806861],
    [0.00000003372, 0.84549509997, 213.4947288117],
    [0.00000003369, 4.04202536168, 213.5910970313],
    [0.00000004154, 5.53330486226, 357.16821922291],
    [0.00000003966, 3.31508277427, 185.3348031342],
    [0.00000004636, 3.53025378242, 6169.9173983028],
    [0.00000004042, 1.50838388855, 432.471082652],
    [0.00000003366, 1.08933178457, 699.4572138708],
    [0.00000003632, 3.02688066661, 771.05741870039],
    [0.00000003967, 1.24490650084, 280.2477566415],
    [0.00000003436, 0.23792026514, 182.3658577176],
    [0.00000004588, 4.60587020989, 25483.18676042879],
    [0.00000003825, 3.29754629533, 6129.3366821102],
    [0.00000003243, 2.79388610647, 279.9725699956],
    [0.00000004579, 0.12286146246, 2735.89604555439],
    [0.00000004222, 5.57461283603, 344.9468627914],
    [0.00000004222, 2.43302018244, 344.45922782439],
    [0.00000003528, 1.32293950034, 187.78248368899],
    [0.00000003976, 2.04915986842, 433.4342904985],
    [0.00000003885, 3.1631729193, 254.33607743521],
    [0.00000003256, 5.3319609074, 1756.1453852893],
    [0.0000000345, 0.99685451963, 1336.6607414141],
    [0.00000003763, 4.59733292662, 598.77849031221],
    [0.00000003661, 5.44386390628, 523.9968917449],
    [0.00000003764, 1.88881171881, 498.6546615102],
    [0.00000003218, 4.24420447682, 829.37669103239],
    [0.00000003783, 1.68999507602, 10067.41068485599],
    [0.00000004463, 4.05993678503, 686.71459257749],
    [0.00000003955, 5.22637518019, 386.9974974773],
    [0.00000003269, 3.81995058967, 90.8064187299],
    [0.00000003268, 4.00080141209, 59.2444133717],
    [0.0000000354, 4.82265466943, 313.1791067565],
    [0.00000003535, 3.36280834282, 78039.12081153718],
    [0.00000003318, 5.75025984322, 522.3336006103],
    [0.00000003173, 2.42451995202, 1475.1782382848],
    [0.00000003156, 4.25625589255, 1596.43025976811],
    [0.00000004282, 4.65731144409, 269.31393096221],
    [0.00000003178, 5.76350607566, 1886.7985756338],
    [0.00000004407, 2.37962716553, 236.7462791421],
    [0.00000003698, 1.89962562145, 762.9806638531],
    [0.00000003368, 3.39410364596, 196.8681383651],
    [0.00000004221, 4.85565822083, 102.74589087111],
    [0.00000003725, 5.21185176662, 511.2879003464],
    [0.00000003791, 3.67873273608, 1147.7406683643],
    [0.00000003211, 5.53866872898, 151.81275218821],
    [0.00000003516, 0.78503990832, 470.2496097668],
    [0.00000003947, 3.66915150826, 757.04277301989],
    [0.0000000399, 4.04987769223, 908.0904428628],
    [0.00000003674, 2.73741527477, 631.7891623043],
    [0.00000003787, 0.46761206888, 798.14475407429],
    [0.00000004369, 4.95294795394, 10100.12709452239],
    [0.00000003536, 5.60494639394, 354.75416856289],
    [0.00000003391, 2.25906474385, 5908.92403967139],
    [0.00000003083, 4.48757923108, 829.0611768473],
    [0.00000004306, 4.50722020801, 503.1080796351],
    [0.00000003547, 1.18953274954, 38.8499338733],
    [0.00000003214, 2.73020363368, 660.851097481],
    [0.00000003069, 3.57500923483, 53.5671549694],
    [0.00000003103, 4.1107255235, 367.3537775043],
    [0.00000003753, 2.02140889521, 486.8606938484],
    [0.00000003982, 5.27127178209, 614.5931228861],
    [0.00000003567, 1.5859603071, 473.2185551834],
    [0.00000003603, 4.72020715629, 10059.54637832979],
    [0.00000003339, 0.7885485383, 15.2553009053],
    [0.00000003342, 4.51414863179, 391.73279989249],
    [0.00000003638, 1.61128601114, 104.7728803006],
    [0.00000003557, 0.14967035207, 365.869304796],
    [0.00000003047, 0.96929818074, 75.2378643719],
    [0.00000003047, 3.71010425526, 74.81296772971],
    [0.00000003632, 1.90931698611, 2175.1423941975],
    [0.00000003727, 1.77889452064, 668.76779363389],
    [0.0000000311, 5.05640701071, 95.68722562449],
    [0.0000000311, 5.05640701071, 96.1748605915],
    [0.00000003034, 2.90532445467, 98.6561710411],
    [0.00000003292, 1.54349283302, 68.90870679129],
    [0.00000003166, 1.24980683639, 5.69407334969],
    [0.00000003043, 2.01164982401, 100.14064374939],
    [0.0000000315, 3.91957783792, 6532.9023114898],
    [0.00000003284, 0.73960261885, 138.8731889388],
    [0.00000003008, 0.77075221627, 287.83687652179],
    [0.00000003451, 1.61115939195, 1206.2199993907],
    [0.00000003235, 3.99969523787, 302.6546713544],
    [0.00000004224, 4.39410979413, 527.22646959241],
    [0.0000000299, 1.05588985579, 182.5234242845],
    [0.00000003383, 1.88782670005, 30.95448957981],
    [0.00000004137, 2.73198697887, 436.4032359151],
    [0.00000003071, 1.35070695195, 198.82818395289],
    [0.00000003076, 3.98325926368, 608.0008407471],
    [0.00000003557, 1.81225163838, 731.70054278519],
    [0.00000003557, 1.81225163838, 732.1881777522],
    [0.00000003552, 0.0777151596, 262.2003839614],
    [0.00000004135, 5.62625626157, 195.1566631207],
    [0.00000002951, 0.30762412341, 161.65586403411],
    [0.00000002963, 2.39442029962, 1044.1602591787],
    [0.00000003762, 3.72993621639, 751.3106328634],
    [0.00000003317, 1.95763203162, 29.55183087609],
    [0.00000003109, 4.88578496396, 1061.4257345661],
    [0.0000000293, 6.21731762577, 60.3106870822],
    [0.00000002938, 5.6833351625, 380.6347100019],
    [0.00000003292, 1.40459725923, 576.4052054941],
    [0.00000002939, 4.59146101512, 47.0297545846],
    [0.00000002922, 0.92284575293, 55.05162767771],
    [0.00000002922, 0.61496402948, 94.9992044239],
    [0.0000000319, 3.68158030074, 9839.133735891],
    [0.0000000411, 4.80248129129, 2885.946877656],
    [0.00000003635, 0.86054546097, 189.96703968541],
    [0.00000003962, 0.33365956631, 511.3515908212],
    [0.00000002907, 5.9311700049, 373.29166833749],
    [0.00000002911, 1.86560039627, 379.13319095109],
    [0.00000003057, 3.85149288925, 517.66524203681],
    [0.00000003748, 3.72709697779, 5985.19011094699],
    [0.0000000325, 0.47551640281, 385.8218413097],
    [0.0000000325, 0.47551640281, 386.3094762767],
    [0.00000003118, 3.20537698563, 404.7506078317],
    [0.00000003966, 4.01667977047, 243.599193712],
    [0.00000002935, 4.99774337126, 1190.5420625756],
    [0.00000003497, 0.14584351149, 3114.5393408061],
    [0.00000002871, 3.51272688765, 743.5493922012],
    [0.00000002948, 3.53416941444, 78338.73484077338],
    [0.00000003905, 4.31421378967, 669.93675215711],
    [0.00000002937, 0.29648642653, 590.4892871438],
    [0.00000004039, 3.00223087435, 25633.23759253039],
    [0.0000000359, 0.30018156799, 376.7025567388],
    [0.00000002945, 6.1660688381, 274.30986580831],
    [0.00000003853, 2.68183358602, 224.6916790494],
    [0.00000003805, 4.38433280473, 3117.50828622269],
    [0.00000002874, 2.09548901827, 89.3555759164],
    [0.0000000356, 2.89480416655, 748.3416874468],
    [0.00000002905, 0.11587901518, 872.66572021069],
    [0.00000003186, 3.01587158229, 53.87597151011],
    [0.00000003567, 1.99291047052, 403.378009708],
    [0.00000003734, 5.74700811308, 909.46304098649],
    [0.00000003317, 3.32499008438, 204.45725824539],
    [0.00000003185, 5.79949438148, 5982.22116553039],
    [0.00000002821, 2.97445175627, 116.781788411],
    [0.00000002821, 2.97445175627, 116.294153444],
    [0.00000002924, 5.47085827815, 143.9027536797],
    [0.00000003219, 3.73062920727, 76.82540294419],
    [0.00000002902, 6.02969827171, 102.5858321767],
    [0.00000002902, 1.79129681788, 47.46499992491],
    [0.00000003255, 1.03586814463, 482.61302640021],
    [0.00000002994, 3.55361890559, 162.3920693445],
    [0.00000003717, 4.95057674227, 6061.4561822226],
    [0.00000003942, 0.04160332713, 6096.6202724438],
    [0.00000003586, 3.03514042359, 983.3596763971],
    [0.00000002803, 3.13310905329, 644.0732570606],
    [0.00000002802, 1.97945311635, 1592.2856581839],
    [0.00000003498, 5.94376047053, 232.2928610172],
    [0.00000003387, 4.62847819573, 25861.83005568049],
    [0.00000003049, 2.94693150681, 6529.93336607319],
    [0.0000000291, 4.4376461584, 355.99256305531],
    [0.00000003266, 4.88740891863, 265.48484356309],
    [0.00000003868, 5.48362456906, 2124.73981801839],
    [0.00000003667, 5.22566104677, 415.90818268021],
    [0.00000002825, 5.24697205919, 294.3172840762],
    [0.00000002775, 4.332787069, 552.02618310591],
    [0.00000003099, 2.76412505763, 436.50630177909],
    [0.00000002858, 3.66116683929, 529.88659846831],
    [0.000000037, 2.58340975985, 25864.79900109709],
    [0.00000002855, 0.67966744335, 529.9829666879],
    [0.00000002805, 5.17536800845, 2089.0519708079],
    [0.00000002766, 2.53840571741, 1600.3624130312],
    [0.00000003634, 3.00439582111, 77.8824868828],
    [0.00000003634, 1.67500661489, 72.16834521881],
    [0.00000002849, 4.00550189531, 323.48860171],
    [0.00000002774, 3.80513617353, 1606.0945531877],
    [0.00000002788, 5.07162517305, 187.0317241636],
    [0.00000002971, 3.10045016404, 586.13318938849],
    [0.00000002901, 2.38225620488, 62.5288729734],
    [0.00000003856, 2.65955588851, 113.2133334428],
    [0.00000002957, 3.89188234418, 53.82778740031],
    [0.00000002741, 4.81447095359, 274.3434957031],
    [0.00000002895, 5.22229317128, 151.6070015115],
    [0.00000002827, 4.49360284571, 979.21507481291],
    [0.00000003178, 2.47353230626, 529.6741501472],
    [0.00000003613, 1.91993731589, 583.65187893891],
    [0.00000003096, 1.82324058715, 530.195415009],
    [0.0000000363, 0.09561817703, 9991.66587844219],
    [0.00000002778, 1.48524423298, 465.02992575149],
    [0.00000002899, 5.75092160965, 428.32648106781],
    [0.00000002977, 2.67097238665, 74.3777223894],
    [0.00000003543, 0.2340519975, 764.6775848825],
    [0.00000002975, 4.20884044975, 224.42855449101],
    [0.00000003288, 0.65434532542, 201.0463698441],
    [0.00000003824, 3.93883782891, 826.9290104776],
    [0.00000003019, 3.67922796466, 829.1642427113],
    [0.0000000278, 5.61085980857, 64.45528866639],
    [0.00000003345, 3.85271375822, 170.46882419179],
    [0.00000003345, 0.71112110463, 170.95645915881],
    [0.000000035, 5.14891828595, 9915.39980716659],
    [0.00000003048, 6.03618648483, 409.8920471572],
    [0.00000002854, 3.24258254247, 112.2501255963],
    [0.00000002775, 1.35827435388, 395.34943897051],
    [0.00000002715, 5.94386708396, 1533.4975106168],
    [0.00000002941, 1.40585778661, 148.11009358871],
    [0.00000002946, 1.94087119383, 430.7741616226],
    [0.00000003426, 1.74548379376, 914.7284169841],
    [0.00000003161, 5.61863271879, 554.4256795509],
    [0.00000002968, 4.51598961684, 1542.09553032591],
    [0.00000003071, 1.13353110856, 1062.80714141041],
    [0.00000002999, 4.97086723334, 132.823423521],
    [0.00000003514, 3.30332079475, 6355.1323206256],
    [0.00000002745, 1.55758551038, 482.0135168486],
    [0.0000000285, 3.54616507843, 395.6649531556],
    [0.00000002663, 4.35706294828, 96.48367713221],
    [0.00000003, 3.14530124801, 519.8522901607],
    [0.00000002655, 1.1902955606, 1160.58635552159],
    [0.00000003001, 3.75883031715, 253.81481257341],
    [0.00000002983, 0.93935356188, 9912.43086174999],
    [0.00000002641, 4.81011847825, 487.3965129252],
    [0.00000003712, 1.4642041989, 10026.82996866339],
    [0.00000003062, 3.91142249915, 789.7043009321],
    [0.00000003147, 1.2231862169, 394.7017453091],
    [0.00000002712, 4.23397123966, 78.1611178062],
    [0.00000002692, 1.62673300086, 161.16822906709],
    [0.00000003303, 1.79828372577, 7.9480653153],
    [0.00000002747, 2.81204346965, 1372.4009782513],
    [0.00000003011, 2.22464119257, 1605.8314286293],
    [0.00000002807, 5.73736217285, 208.1262869501],
    [0.00000002631, 5.99241143684, 271.6497369324],
    [0.00000003688, 2.66246767657, 26543.05632558499],
    [0.00000003416, 3.60662433619, 331.07772159029],
    [0.00000002951, 2.78355300655, 12564.91104475801],
    [0.00000002727, 0.43905805953, 1064.0791657976],
    [0.00000002902, 3.07188287999, 1540.87418217599],
    [0.00000002728, 4.59132510744, 109.5563668256],
    [0.00000002999, 5.77659280033, 219.275053078],
    [0.00000002764, 1.07670855016, 142.20583265029],
    [0.00000002586, 2.07825454401, 959.8174330558],
    [0.00000002719, 0.45061432224, 52325.61329776649],
    [0.00000003042, 5.84610070395, 752.7951055717],
    [0.00000003089, 0.78770097881, 93.28772917949],
    [0.00000003647, 5.21958279042, 697.5633508853],
    [0.00000003492, 2.7729794931, 580.9135053732],
    [0.00000003597, 0.24187824789, 132.2809067998],
    [0.00000002974, 3.91006313529, 444.5830566264],
    [0.00000002572, 2.67254064624, 2117.5232051536],
    [0.00000002572, 2.59845311288, 23.33205575259],
    [0.00000003167, 3.7797175766, 12567.8799901746],
    [0.00000003382, 4.72616841526, 10285.3420168452],
    [0.00000002555, 4.3480494936, 678.11657286839],
    [0.000000033, 2.1524435649, 440.6509033633],
    [0.00000002831, 4.29539679381, 540.01727499551],
    [0.00000003189, 3.69749797847, 769.86363900301],
    [0.0000000319, 5.54179110621, 2424.3538472546],
    [0.0000000328, 0.39508288314, 86.3866304998],
    [0.0000000278, 3.71874153588, 1586.34776735071],
    [0.00000002594, 4.89957913206, 1373.88545095959],
    [0.00000002782, 1.02745709962, 1268.9926898476],
    [0.0000000301, 4.0437046744, 1543.8431275926],
    [0.00000003022, 4.32583593317, 181.2995840071],
    [0.00000003022, 1.18424327958, 180.81194904009],
    [0.00000002833, 2.10884741514, 555.7982776746],
    [0.00000003293, 0.26036305872, 463.490571289],
    [0.00000003316, 2.51263252063, 807.9966746408],
    [0.000000033, 0.73760471241, 649.80539721709],
    [0.00000002983, 0.24641616415, 936.4016185141],
    [0.00000002865, 4.91220221036, 2192.40786958489],
    [0.00000003356, 5.11523694385, 247.5862287293],
    [0.00000002506, 5.3054466069, 40.8581635709],
    [0.00000003114, 5.11220642057, 1553.8919901152],
    [0.00000003268, 0.04975503988, 737.66849419841],
    [0.000000031, 4.07790490748, 657.66721161581],
    [0.0000000251, 1.43422723324, 20278.24855051219],
    [0.00000002833, 3.12964283648, 539.8115243188],
    [0.00000002554, 5.25801939266, 826.1952972947],
    [0.00000002806, 5.71817066352, 351.9485352076],
    [0.00000002633, 0.82117751455, 1448.6670495269],
    [0.00000002482, 2.35351578734, 1159.1018828133],
    [0.00000003088, 3.640653759, 245.7862418359],
    [0.00000003458, 4.58072564831, 809.4811473491],
    [0.00000003385, 0.97492846896, 1056.444353935],
    [0.0000000305, 2.24338368884, 52174.56562792359],
    [0.00000002571, 2.13979409339, 584.5850262054],
    [0.00000002506, 6.23219506154, 381.88968804659],
    [0.00000002718, 2.48384899075, 352.17228437681],
    [0.00000003112, 5.17420301794, 481.1285536919],
    [0.00000002427, 0.4616077981, 20275.27960509559],
    [0.0000000266, 3.1145652541, 587.553971622],
    [0.00000003031, 2.65730851569, 106.62105130379],
    [0.00000002876, 4.25326612876, 837.76226242039],
    [0.00000002876, 4.25326612876, 838.2498973874],
    [0.00000002493, 4.86549248982, 339.53023682],
    [0.00000003071, 2.94134266397, 264.7486382527],
    [0.00000002956, 4.3601071219, 561.64229241569],
    [0.00000002956, 4.3601071219, 562.12992738271],
    [0.00000002675, 4.82615405372, 257.6687211467],
    [0.00000002412, 0.21644968354, 537.15139544289],
    [0.00000002425, 5.98792108916, 243.6540754662],
    [0.00000003094, 0.89516329895, 911.7594715675],
    [0.00000002916, 5.65344305695, 627.1232958583],
    [0.00000002461, 0.76674192255, 672.69994689699],
    [0.00000003109, 6.09716177778, 45.277951801],
    [0.00000003239, 0.98686936775, 412.33972771199],
    [0.0000000293, 1.53043345203, 173.38288785421],
    [0.00000002377, 2.36768270315, 1927.9554384424],
    [0.00000002783, 2.17600324391, 888.9679877516],
    [0.00000002572, 0.2664325184, 1536.46645603341],
    [0.00000002447, 1.98626338075, 1327.57508673799],
    [0.00000002533, 2.95752298614, 1330.5440321546],
    [0.00000002951, 2.80925054018, 328.5964111407],
    [0.00000002474, 2.81613373048, 1407.51018671831],
    [0.00000002518, 3.82616998392, 175.57663362249],
    [0.00000002678, 4.15340303192, 180.40581212981],
    [0.00000003251, 1.9051098454, 83.4109874388],
    [0.00000002327, 0.66127447858, 325.5492210343],
    [0.00000002802, 0.16897738467, 121.81135315189],
    [0.00000002675, 5.49343148274, 105.6242135625],
    [0.00000002909, 0.78041431577, 651.1868040614],
    [0.00000002358, 1.30452169405, 377.8782129064],
    [0.0000000278, 3.88186933893, 291.2934569054],
    [0.00000002876, 5.63710538659, 6813.0106325695],
    [0.00000002523, 2.55630283191, 440.9115357942],
    [0.00000003239, 3.10119943091, 724.84762821529],
    [0.00000002532, 2.35901341471, 39.34006096781],
    [0.00000002503, 3.49357090208, 360.3039209783],
    [0.00000002568, 3.49872926031, 1699.5230339867],
    [0.0000000257, 5.29329193342, 299.47327761669],
    [0.00000003223, 4.19015476099, 442.3960085025],
    [0.00000002316, 2.75922843554, 714.92270236481],
    [0.00000002457, 1.15216748085, 552.829332258],
    [0.00000002319, 0.77064178822, 290.12449838219],
    [0.00000002922, 4.03553902122, 1600.2023543368],
    [0.00000002297, 1.88640861087, 1811.52934209949],
    [0.00000002674, 1.18404012894, 519.26158932971],
    [0.00000002585, 1.04419941319, 754.27957828001],
    [0.00000002277, 6.0083199716, 386.10372559999],
    [0.00000002326, 3.39783484366, 172.80463016199],
    [0.00000003163, 2.18762574676, 476.18750059999],
    [0.00000003127, 5.74767332186, 652.9867909548],
    [0.00000003015, 4.6008387741, 3190.80541208169],
    [0.00000003015, 4.6008387741, 3191.29304704871],
    [0.00000002772, 4.21896384049, 431.08967580769],
    [0.00000002329, 1.3834261187, 759.0148806952],
    [0.00000002334, 2.7655769962, 837.97471074149],
    [0.00000002991, 0.49950728589, 458.810150628],
    [0.00000003166, 4.75068391337, 26161.44408491669],
    [0.00000002566, 4.39543350128, 63.23144838899],
    [0.00000002282, 5.65971495881, 811.2174437677],
    [0.00000002423, 3.92143505564, 103.109589166],
    [0.00000003125, 4.47876249023, 939.37056393069],
    [0.00000002277, 3.94882643258, 0.27744737829],
    [0.00000002982, 3.78210055675, 37.8555882595],
    [0.00000002982, 3.78210055675, 37.3679532925],
    [0.00000002437, 0.3870221864, 377.12075573661],
    [0.00000002672, 6.00980899009, 412.07909528109],
    [0.00000002289, 1.03807449021, 1258.6977491091],
    [0.00000002259, 4.68066906641, 113.6315324406],
    [0.00000003098, 4.89446319562, 612.4206289772],
    [0.00000003098, 1.75287054203, 611.9329940102],
    [0.00000003157, 4.46324746103, 3795.7656107106],
    [0.00000002795, 0.77242359455, 10743.2203287891],
    [0.00000002777, 4.75646431289, 211.09523236671],
    [0.00000003088, 5.58047807216, 230.52650401861],
    [0.0000000294, 3.5164867505, 714.6620699339],
    [0.00000002685, 2.97936141724, 303.82362987761],
    [0.0000000226, 4.95371521477, 124.2041519525],
    [0.00000003092, 0.26856203052, 3414.1533700423],
    [0.00000003015, 1.58292445535, 342.4991822366],
    [0.00000003083, 3.86343122317, 206.9506307825],
    [0.00000003083, 0.72183856958, 206.4629958155],
    [0.00000002331, 5.556133562, 820.5662230022],
    [0.00000002712, 1.33807664445, 770.306659175],
    [0.00000002587, 5.7119439847, 636.2089505344],
    [0.00000002587, 2.57035133111, 635.72131556739],
    [0.00000002803, 2.76934913754, 25938.09612695609],
    [0.00000002803, 2.76934913754, 25938.5837619231],
    [0.00000002405, 5.05357423584, 488.6057989876],
    [0.00000002359, 2.98384806596, 87.067954056],
    [0.0000000216, 3.91324321531, 199.528267241],
    [0.00000002362, 5.50921508396, 1222.0346319646],
    [0.00000002362, 5.50921508396, 1222.52226693161],
    [0.0000000274, 0.85654894869, 627.61093082531],
    [0.00000002798, 2.35367531012, 771.3481117113],
    [0.00000002798, 5.49526796371, 770.8604767443],
    [0.00000002435, 2.36446205622, 350.08830211689],
    [0.00000002357, 1.46842067912, 355.2418035299],
    [0.00000002485, 3.78369829663, 142.41828097139],
    [0.00000002521, 1.0349713151, 129.6756596781],
    [0.00000002089, 5.45017034742, 74.5859651936],
    [0.00000002302, 3.23730533014, 52177.04693837319],
    [0.00000002302, 3.23730533014, 52177.53457334019],
    [0.00000002619, 4.76291733303, 1321.6828878871],
    [0.00000002572, 3.16528157166, 659.43031524749],
    [0.00000002225, 1.53417972319, 59.526297662],
    [0.00000002835, 0.16315666564, 59.34747923569],
    [0.00000002282, 5.64376298083, 295.9136313691],
    [0.00000001992, 0.17905928659, 765.64079272899],
    [0.00000001992, 3.32065194018, 766.128427696],
    [0.00000002574, 3.32754474496, 192.5602247196],
    [0.00000002264, 4.07388420311, 75.0590459456],
    [0.00000002089, 2.85631372853, 74.489596974],
    [0.00000002032, 4.9743066792, 215.6817769356],
    [0.00000001982, 3.59359575315, 898.5292153072],
    [0.00000001982, 0.45200309956, 899.0168502742],
    [0.00000002374, 4.72352640183, 550.9690991673],
    [0.00000002374, 4.72352640183, 551.45673413431],
    [0.00000002352, 0.06708062177, 24.36220744081],
    [0.00000002591, 3.75715375752, 367.72628451979],
    [0.0000000223, 1.52395191838, 329.9690092644],
    [0.0000000261, 2.73849324439, 66.1522096958],
    [0.0000000261, 2.73849324439, 66.63984466281],
    [0.00000001942, 5.47218005624, 74.6978397782],
    [0.00000002217, 2.71427205276, 353.0572475335],
    [0.00000002034, 1.30593331214, 527.9626749028],
    [0.00000002034, 1.30593331214, 528.4503098698],
    [0.00000002025, 1.90306188675, 94.9846502089],
    [0.0000000222, 0.06407550248, 160.365079915],
    [0.00000002205, 5.46838417109, 460.7822583033],
    [0.00000002205, 5.46838417109, 460.2946233363],
    [0.00000001903, 5.2678882452, 170.51700830159],
    [0.00000001903, 5.2678882452, 171.0046432686],
    [0.0000000188, 5.91981669441, 845.8390172677],
    [0.00000001879, 1.52960331705, 810.41429461559],
    [0.00000001918, 4.29742245145, 980.4243608753],
    [0.00000001918, 1.15582979786, 980.91199584231],
    [0.00000002012, 4.58948418435, 482.9767246951],
    [0.00000002408, 3.65417851763, 673.5600888795],
    [0.00000002408, 3.65417851763, 673.0724539125],
    [0.00000001917, 4.50882706137, 464.2267765994],
    [0.00000001917, 4.50882706137, 464.7144115664],
    [0.00000002523, 3.82677029026, 207.1173871213],
    [0.00000002235, 4.73973227208, 156.2874221725],
    [0.00000001889, 6.20777223595, 96.6291816116],
    [0.00000002163, 4.45487815975, 1325.1274061832],
    [0.00000002163, 1.31328550616, 1325.6150411502],
    [0.00000002041, 4.71231705875, 753.3858064027],
    [0.00000002385, 0.51948475769, 589.1021348051],
    [0.00000002385, 3.66107741128, 589.5897697721],
    [0.0000000232, 4.52095470178, 153.772797776],
    [0.00000001825, 4.34973286546, 241.62708603669],
    [0.00000001938, 5.90510178691, 989.98558843089],
    [0.00000001938, 5.90510178691, 990.47322339791],
    [0.00000001801, 1.59469951538, 386.4762326155],
    [0.00000001801, 1.59469951538, 386.96386758251],
    [0.0000000187, 0.33398234764, 814.0833233203],
    [0.0000000187, 0.33398234764, 813.5956883533],
    [0.0000000182, 2.95417643509, 194.42045781031],
    [0.00000002331, 3.49571982266, 229.2087876491],
    [0.00000001846, 5.53844865127, 1310.6371876232],
    [0.00000001813, 3.46850679276, 242.85092631409],
    [0.00000001813, 0.32691413917, 243.3385612811],
    [0.00000002125, 0.90702543941, 927.73416283579],
    [0.00000001841, 0.75141045449, 114.1552894299],
    [0.0000000177, 5.79168127546, 113.89465699899],
    [0.00000001797, 1.81953146289, 286.3524038135],
    [0.00000002348, 0.72588619615, 838.4623457085],
    [0.00000002341, 0.85296576676, 80.475671917],
    [0.00000002214, 5.39273615306, 355.50492808829],
    [0.00000001986, 5.86961068002, 180.5513166092],
    [0.00000001742, 6.12132593481, 380.37158544351],
    [0.00000001858, 5.61326911538, 1471.50920958009],
    [0.00000001858, 5.61326911538, 1471.9968445471],
    [0.00000001883, 3.44892554698, 102.7671427305],
    [0.00000002209, 4.52058460762, 658.40341692619],
    [0.00000002209, 1.37899195403, 658.8910518932],
    [0.00000001942, 2.25463899399, 703.38936713389],
    [0.00000001915, 3.44323535772, 423.17297965479],
    [0.00000001915, 3.44323535772, 423.66061462181],
    [0.00000002166, 3.23067903187, 79.53371592989],
    [0.00000001755, 2.27265833368, 152.50077338879],
    [0.000000017, 4.83117512138, 50.15875869559],
    [0.00000002051, 2.99945701352, 807.9666140608],
    [0.00000002051, 2.99945701352, 808.4542490278],
    [0.00000001839, 5.75757356379, 756.56720014041],
    [0.00000001682, 4.06333599913, 1049.5768851501],
    [0.00000001682, 0.92174334554, 1050.0645201171],
    [0.00000001706, 4.77079031354, 832.34563644899],
    [0.00000001706, 4.77079031354, 832.833271416],
    [0.00000001776, 3.76195690472, 1384.93115122349],
    [0.00000001776, 0.62036425113, 1385.4187861905],
    [0.00000001811, 4.64985456293, 454.55367445919],
    [0.00000001811, 4.64985456293, 455.0413094262],
    [0.00000001692, 4.72965893305, 271.16210196539],
    [0.00000002206, 6.17339592873, 132.33578855399],
    [0.00000001658, 3.45028228993, 184.3379653929],
    [0.00000001875, 5.27331155633, 1282.58913653029],
    [0.00000001875, 2.13171890274, 1283.0767714973],
    [0.00000001686, 0.4501490027, 406.71065341949],
    [0.00000001686, 0.4501490027, 407.1982883865],
    [0.00000002083, 4.25600154596, 119.638859243],
    [0.0000000224, 3.90434509762, 404.3748474493],
    [0.00000001952, 0.24163677359, 458.33457774851],
    [0.00000001952, 0.24163677359, 457.8469427815],
    [0.00000002288, 5.51294457419, 135.3047339706],
    [0.00000001949, 3.2683058066, 1056.1691672891],
    [0.00000001949, 0.12671315301, 1056.6568022561],
    [0.00000001974, 1.88730039824, 269.93826168799],
    [0.00000001974, 5.02889305183, 270.42589665501],
    [0.00000001659, 5.45360392276, 1450.3115809296],
    [0.00000001659, 5.45360392276, 1450.79921589661],
    [0.00000002309, 0.71286416918, 74.7984135147],
    [0.00000001644, 3.45713257957, 321.5164940347],
    [0.00000001644, 0.31553992598, 322.00412900171],
    [0.00000001656, 0.89488112289, 516.9169746389],
    [0.00000001656, 0.89488112289, 517.4046096059],
    [0.00000002034, 1.27659765222, 274.87931477991],
    [0.00000002034, 1.27659765222, 274.39167981289],
    [0.00000002154, 3.29965728228, 516.2926439131],
    [0.00000002154, 0.15806462869, 515.8050089461],
    [0.00000001711, 1.53733627594, 885.99904233499],
    [0.00000001711, 1.53733627594, 886.48667730201],
    [0.00000001826, 2.44969882307, 398.4369566161],
    [0.00000001826, 2.44969882307, 398.9245915831],
    [0.00000001966, 4.10423736234, 15.9096922111],
    [0.00000001966, 0.96264470875, 16.3973271781],
    [0.00000001678, 3.6951942687, 1182.67775604939],
    [0.00000001678, 0.55360161511, 1183.16539101641],
    [0.00000002098, 4.85173961477, 630.09224127489],
    [0.00000002098, 1.71014696118, 630.5798762419],
    [0.00000002239, 2.53095817704, 446.5551643017],
    [0.00000002239, 2.53095817704, 446.06752933469],
    [0.00000001889, 1.07863762669, 86.69544704049],
    [0.00000001889, 1.07863762669, 87.18308200751],
    [0.00000001759, 3.42836121936, 614.1175500066],
    [0.00000001759, 0.28676856577, 613.6299150396],
    [0.00000001673, 3.25241882006, 231.06902073981],
    [0.00000001607, 5.76189875081, 412.12727939089],
    [0.00000001607, 2.62030609722, 412.6149143579],
    [0.0000000207, 3.82797801425, 824.23525170691],
    [0.00000001835, 3.95891079221, 146.87169909629],
    [0.0000000158, 4.75553561047, 2002.73703700969],
    [0.0000000158, 1.61394295688, 2003.2246719767],
    [0.00000001979, 5.8873037934, 407.23191828129],
    [0.00000001979, 5.8873037934, 407.71955324831],
    [0.00000001764, 5.38315884955, 544.7525774107],
    [0.00000001815, 2.1104259443, 174.9222423167],
    [0.00000001808, 1.40200347339, 454.7774236284],
    [0.00000001808, 1.40200347339, 455.2650585954],
    [0.00000001667, 4.30345024075, 409.6795988361],
    [0.00000001667, 1.16185758716, 410.1672338031],
    [0.00000001739, 0.2147195591, 271.4227343963],
    [0.00000001739, 0.2147195591, 271.9103693633],
    [0.00000001764, 2.87177593963, 625.42637482889],
    [0.00000001764, 6.01336859322, 625.9140097959],
    [0.00000001578, 5.77840141165, 1321.19525292009],
    [0.00000002105, 2.7672177975, 348.1282565291],
    [0.00000001602, 4.08797383059, 1133.91971127299],
    [0.00000001602, 0.946381177, 1134.40734624],
    [0.0000000169, 0.70280224085, 2.24955505361],
    [0.0000000169, 0.70280224085, 1.7619200866],
    [0.00000001611, 3.21423971704, 1442.2348260823],
    [0.00000001611, 3.21423971704, 1442.7224610493],
    [0.00000001553, 0.42212828385, 550.8572245827],
    [0.00000001553, 0.42212828385, 551.3448595497],
    [0.00000001801, 0.3031876898, 450.4727633498],
    [0.00000001801, 3.44478034339, 450.96039831681],
    [0.00000002, 4.2313755904, 239.1457755871],
    [0.00000002, 4.2313755904, 238.6581406201],
    [0.0000000161, 2.64143743565, 1274.7248300041],
    [0.0000000161, 2.64143743565, 1275.2124649711],
    [0.00000001669, 2.95148684971, 839.2467351287],
    [0.00000001669, 2.95148684971, 839.73437009571],
    [0.00000001618, 1.79025814071, 376.9150050599],
    [0.00000001618, 1.79025814071, 377.4026400269],
    [0.00000001986, 2.19226936272, 980.3907309805],
    [0.00000001986, 5.33386201631, 979.90309601349],
    [0.00000001523, 6.09198787084, 67.94549894479],
    [0.00000001625, 0.4890721079, 72.94143379089],
    [0.00000001699, 3.06470005459, 418.2776185452],
    [0.00000001699, 3.06470005459, 418.76525351221],
    [0.00000001699, 4.85438710621, 991.4700611392],
    [0.00000001699, 4.85438710621, 991.9576961062],
    [0.0000000214, 4.60009132464, 468.8926430454],
    [0.0000000214, 1.45849867105, 469.38027801241],
    [0.00000001943, 3.84559085346, 55.52720055719],
    [0.00000001887, 1.39886028887, 250.9276811614],
    [0.00000001887, 1.39886028887, 251.4153161284],
    [0.000000015, 2.05004005131, 63.6039554045],
    [0.00000001595, 2.85027634129, 440.1753304838],
    [0.00000001595, 2.85027634129, 439.6876955168],
    [0.00000001499, 0.58296033612, 309.0345051723],
    [0.00000001499, 3.72455298971, 309.5221401393],
    [0.00000001554, 1.7921788544, 759.04851059],
    [0.00000001554, 4.93377150799, 759.536145557],
    [0.00000001834, 3.071432891, 1.4531035459],
    [0.00000001834, 3.071432891, 1.9407385129],
    [0.00000002054, 5.705881931, 549.972261426],
    [0.00000002054, 2.56428927741, 549.48462645899],
    [0.00000001488, 2.83790861898, 1095.3659845099],
    [0.00000001488, 5.97950127257, 1095.85361947691],
    [0.00000001484, 3.96898705243, 68.1243173711],
    [0.00000001818, 4.87903340292, 587.6176620968],
    [0.00000001818, 4.87903340292, 588.10529706381],
    [0.00000001714, 3.6068357811, 245.03548231051],
    [0.00000001714, 0.46524312751, 244.54784734349],
    [0.0000000192, 2.50542705831, 675.0445615878],
    [0.0000000192, 2.50542705831, 674.5569266208],
    [0.00000001504, 1.02910554577, 833.7964792625],
    [0.00000002044, 3.94263526988, 6662.95980046789],
    [0.00000002044, 0.80104261629, 6663.4474354349],
    [0.00000001648, 3.48244866747, 438.5420999292],
    [0.00000001466, 0.25731804451, 304.36614659881],
    [0.00000001472, 1.73963754908, 1257.4593546167],
    [0.00000001472, 4.88123020267, 1257.9469895837],
    [0.00000001615, 5.47975458652, 984.35651413839],
    [0.00000001625, 3.50840756791, 949.1924239172],
    [0.00000001625, 3.50840756791, 949.6800588842],
    [0.00000001715, 1.35099907342, 349.6127292374],
    [0.00000001931, 2.40467498858, 1819.8812835927],
    [0.0000000145, 3.7854604322, 493.7593004006],
    [0.0000000145, 0.64386777861, 493.2716654336],
    [0.00000001436, 5.92306997669, 430.02340209721],
    [0.00000001436, 2.7814773231, 429.5357671302],
    [0.00000001945, 4.63182275077, 131.68139724819],
    [0.00000001431, 4.50116477345, 157.39613449839],
    [0.00000001662, 4.8033736754, 6209.53490664889],
    [0.00000001662, 4.8033736754, 6210.0225416159],
    [0.00000001819, 3.50918818351, 1008.73553652659],
    [0.00000001819, 3.50918818351, 1009.22317149361],
    [0.00000001518, 1.15354810143, 328.6782251453],
    [0.00000001518, 4.29514075502, 329.1658601123],
    [0.00000001638, 1.4355693844, 519.88592005549],
    [0.00000001638, 4.57716203799, 520.37355502251],
    [0.0000000168, 4.46803343205, 359.6495296725],
    [0.0000000168, 4.46803343205, 360.1371646395],
    [0.00000001843, 0.96654134734, 478.15960827531],
    [0.00000001843, 4.10813400093, 477.6719733083],
    [0.00000001489, 1.97136538075, 400.49087829599],
    [0.00000001489, 1.97136538075, 400.97851326301],
    [0.00000001752, 4.88043742079, 6271.78633224399],
    [0.00000001752, 1.7388447672, 6272.273967211],
    [0.00000001895, 4.56971312882, 1055.1723295478],
    [0.00000001895, 1.42812047523, 1054.6846945808],
    [0.00000001717, 3.59655571468, 536.5606946119],
    [0.00000001758, 1.02130969978, 1095.0504703248],
    [0.00000001758, 4.16290235337, 1094.5628353578],
    [0.00000001721, 4.15981655427, 104.33342944339],
    [0.00000001713, 4.4728547974, 621.4942215658],
    [0.0000000146, 3.44943623014, 341.1265841129],
    [0.0000000146, 0.30784357655, 340.63894914589],
    [0.0000000178, 5.09342203154, 1668.8336137498],
    [0.0000000178, 5.09342203154, 1668.3459787828],
    [0.00000001401, 2.09081885651, 451.48415530609],
    [0.00000001401, 2.09081885651, 451.97179027311],
    [0.00000001394, 1.22796389725, 252.4121538697],
    [0.00000001942, 5.36682846266, 10593.16949668749],
    [0.00000001942, 2.22523580907, 10593.6571316545],
    [0.00000001427, 5.28628705446, 228.21194990781],
    [0.00000001427, 2.14469440087, 227.72431494079],
    [0.00000001395, 0.11161595772, 697.76029284139],
    [0.00000001395, 3.25320861131, 698.2479278084],
    [0.00000001403, 2.45154329677, 281.24459438279],
    [0.00000001403, 5.59313595036, 281.7322293498],
    [0.00000001507, 0.19523124567, 193.8991929485],
    [0.00000001401, 2.18053804948, 47.4504457099],
    [0.00000001458, 2.8724363526, 214.19730422731],
    [0.00000001408, 3.27849545936, 105.76971804189],
    [0.00000001545, 3.36846576185, 912.5438609877],
    [0.00000001545, 3.36846576185, 913.03149595471],
    [0.0000000178, 3.98299757592, 623.1911425952],
    [0.0000000178, 0.84140492233, 623.6787775622],
    [0.00000001421, 4.99710506357, 1349.5064285714],
    [0.00000001421, 4.99710506357, 1349.9940635384],
    [0.00000001421, 2.01327407687, 1447.18257681859],
    [0.00000001421, 5.15486673046, 1447.6702117856],
];

const X1: &[Term] = &[
    [0.0222511375, 1.80968682072, 0.2438174835],
    [0.00738897387, 6.01007226305, 149.8070146181],
    [0.00239408407, 5.33797172897, 73.5409433425],
    [0.00229359688, 2.48132547665, 76.50988875911],
    [0.0011058356, 5.57527703898, 11.2895177474],
    [0.00095657865, 0.35447716429, 63.9797157869],
    [0.00081488096, 1.21038214498, 86.07111631471],
    [0.00045577241, 2.29785938115, 138.76131435421],
    [0.00051354528, 2.18905169391, 224.5886131854],
    [0.00038568, 0.30675960989, 71.09326278771],
    [0.00037681305, 0.07581737994, 75.0254160508],
    [0.00041920157, 4.16572993198, 74.53778108379],
    [0.00036154364, 1.23626010875, 78.9575693139],
    [0.00021671035, 4.93673342225, 151.2914873264],
    [0.00019425371, 1.30586488933, 77.9943614674],
    [0.0001737717, 0.2464849659, 72.05647063421],
    [0.00015101686, 5.5369590868, 4.1759707466],
    [0.00007734175, 1.61342909349, 71.8440223131],
    [0.00007431784, 6.20301472189, 78.2068097885],
    [0.00006987545, 2.40718117644, 145.874861355],
    [0.00007298813, 2.23506175232, 3.21276290011],
    [0.00007589358, 2.767769282, 148.32254190981],
    [0.0000437758, 3.74279342397, 160.852714882],
    [0.00003947976, 4.74495586893, 65.46418849521],
    [0.00004122455, 1.48583809368, 22.3352180113],
    [0.00002797759, 4.90690786558, 213.5429129215],
    [0.00002617647, 3.36386956187, 9.8050450391],
    [0.00002637599, 4.541746375, 12.77399045571],
    [0.00003175281, 4.65202774219, 299.37021175271],
    [0.0000224528, 3.50167279614, 52.446380556],
    [0.00002227953, 0.18128254666, 87.555589023],
    [0.00002822936, 3.40176644427, 84.5866436064],
    [0.00002517942, 2.84033057389, 18.40306474821],
    [0.00002220819, 4.78480068974, 72.577735496],
    [0.00001622656, 3.75786744204, 153.73916788121],
    [0.00001925669, 2.39938534926, 39.86132582961],
    [0.00001555527, 4.13751627934, 74.0622082043],
    [0.00001901819, 0.0771953551, 127.71561409031],
    [0.00001598284, 0.08347749781, 79.47883417571],
    [0.00001476433, 3.67237467967, 75.98862389731],
    [0.00001532412, 3.71778823462, 152.77596003471],
    [0.00001440833, 5.32095275949, 127.22797912329],
    [0.00001745915, 3.2492339098, 77.4730966056],
    [0.00001713773, 3.39380823601, 223.1041404771],
    [0.00001706344, 1.11295016517, 226.07308589371],
    [0.00001357973, 1.46850463244, 70.5719979259],
    [0.00001738426, 5.39623683669, 146.8380692015],
    [0.00001467571, 3.53057221654, 2.9375762542],
    [0.00001179806, 5.13920013032, 220.6564599223],
    [0.00001236409, 0.98112016066, 4.6972356084],
    [0.00001067152, 1.38177304653, 62.4952430786],
    [0.00000977123, 1.01847642495, 74.91354146621],
    [0.00000977123, 0.51933335746, 75.1372906354],
    [0.00000937717, 3.09490503051, 56.8661687861],
    [0.00001087876, 4.99233413497, 131.6477673534],
    [0.00000890295, 4.27308702685, 426.8420083595],
    [0.00001040906, 5.4183503576, 110.189506272],
    [0.00000935342, 0.35022350257, 149.3193796511],
    [0.00000862611, 4.50957284182, 52.934015523],
    [0.00000777859, 6.15240216459, 63.49208081989],
    [0.00000746826, 4.78455196521, 93.1846633155],
    [0.00000747709, 5.93971377228, 206.42936592071],
    [0.000006482, 0.2034506098, 80.44204202221],
    [0.0000064035, 6.10288292956, 1.24065522479],
    [0.0000079475, 3.28971980546, 7.3573644843],
    [0.00000605254, 0.10549865294, 1059.6257476727],
    [0.00000615326, 4.84518689972, 10.8018827804],
    [0.00000569613, 4.62358405921, 73.0533083755],
    [0.00000665795, 3.49783402516, 97.11681657861],
    [0.00000575875, 2.42879950405, 522.8212355773],
    [0.00000563041, 1.91595270042, 537.0483295789],
    [0.00000493956, 3.50296492994, 137.2768416459],
    [0.00000477372, 1.1576600758, 41.3457985379],
    [0.00000445046, 3.65108277717, 2.69149803831],
    [0.00000441333, 1.07480656636, 67.91186905],
    [0.00000413028, 3.78904491456, 66.9486612035],
    [0.00000408718, 0.33871031527, 82.13896305161],
    [0.00000393354, 1.58833529143, 15.2216710105],
    [0.00000347208, 4.09740245991, 146.6256208804],
    [0.00000350848, 3.06941415154, 76.0222537921],
    [0.00000311934, 1.3340223048, 1.7282901918],
    [0.00000307527, 4.70379249427, 202.4972126576],
    [0.00000343437, 4.42179382418, 142.6934676173],
    [0.00000291412, 4.4179646035, 5.6604434549],
    [0.00000327071, 5.84215236142, 113.15845168861],
    [0.00000283053, 1.12281740456, 138.2736793872],
    [0.00000276688, 0.37637007386, 70.6056278207],
    [0.0000027965, 4.09523616178, 83.1021708981],
    [0.00000294524, 0.50203802366, 145.35359649321],
    [0.00000254666, 6.2542649294, 235.6343134493],
    [0.00000294078, 1.06082719798, 33.43580002939],
    [0.00000275813, 1.12612561421, 56.3785338191],
    [0.0000025574, 0.7177750589, 265.745475994],
    [0.00000273184, 1.96036359915, 36.892380413],
    [0.0000024656, 5.32039073182, 159.36824217371],
    [0.00000235614, 3.63128451947, 20.850745303],
    [0.000002173, 4.25375853714, 152.9884083558],
    [0.00000233552, 0.39323553377, 108.70503356371],
    [0.00000209062, 4.64314195946, 140.2457870625],
    [0.00000229061, 2.81847049652, 194.89603068979],
    [0.00000197502, 5.13942008569, 190.9638774267],
    [0.00000194913, 2.32796285072, 209.12312469139],
    [0.00000192549, 0.45945144783, 23.81969071961],
    [0.00000228047, 5.73826756793, 297.8857390444],
    [0.00000167442, 6.01751680724, 134.3415261241],
    [0.00000169219, 3.75680402327, 59.55992755679],
    [0.00000182817, 0.0071121529, 134.8291610911],
    [0.00000154035, 0.91123613328, 288.32451148881],
    [0.00000165598, 6.03173268563, 6.1817083167],
    [0.00000153435, 2.7003388033, 162.3371875903],
    [0.0000019193, 0.83163790645, 374.15181032],
    [0.00000154136, 3.25486116088, 14.258463164],
    [0.00000152205, 1.12920055542, 120.1144321225],
    [0.00000179814, 4.008470587, 60.04756252381],
    [0.00000143557, 5.80170507906, 212.05844021321],
    [0.00000141934, 1.31057170313, 69.6087900794],
    [0.00000140696, 5.35688361188, 29.44876501211],
    [0.00000140277, 5.15925499975, 80.963306884],
    [0.00000134345, 0.43302660999, 39.6006933987],
    [0.00000148026, 3.01875910211, 186.4555775476],
    [0.00000138037, 4.87862613958, 3.6883357796],
    [0.00000122748, 4.43345211218, 129.2000867986],
    [0.00000132977, 1.16919209454, 68.80564092731],
    [0.00000141987, 4.72628475671, 114.6429243969],
    [0.00000132318, 3.93114176785, 90.0032695778],
    [0.0000011601, 3.50661004031, 33.3809182752],
    [0.00000119775, 2.67306209327, 69.0875252176],
    [0.00000120027, 0.98279379047, 305.10235190919],
    [0.00000117279, 0.70638047167, 277.2788112249],
    [0.00000120086, 2.88322008541, 50.6463936626],
    [0.00000109599, 5.23026989145, 89.0400617313],
    [0.00000121041, 2.51714662354, 154.260432743],
    [0.00000118779, 0.36869567507, 81.2451911743],
    [0.0000010325, 3.71412105335, 144.39038864671],
    [0.00000118351, 1.42159512933, 41.4006802921],
    [0.00000116406, 3.28187465983, 116.18227885939],
    [0.00000136248, 5.73853005968, 45.3328335552],
    [0.00000104859, 2.65494895117, 54.41848823131],
    [0.00000096225, 4.4555840398, 50.9619078477],
    [0.00000116279, 6.16263593711, 227.557558602],
    [0.00000122913, 3.57188437917, 300.854684461],
    [0.00000093159, 1.08143702108, 110.45013870291],
    [0.00000102738, 5.34762722745, 152.2546951729],
    [0.00000086724, 4.81341834361, 7.83293736379],
    [0.00000081743, 6.27044958652, 228.5207664485],
    [0.00000084795, 6.21044885379, 42.83027124621],
    [0.00000075252, 0.0831853607, 2.20386307129],
    [0.00000074096, 0.2575975191, 148.84380677161],
    [0.00000074141, 6.1265143195, 150.7702224646],
    [0.00000080549, 4.94365526521, 99.40443843901],
    [0.00000073326, 3.5172998583, 640.1411037975],
    [0.00000081866, 2.33249180877, 31.9513273211],
    [0.00000073049, 0.08899713731, 9.3174100721],
    [0.00000074334, 4.73265453188, 8.32057233081],
    [0.00000073323, 5.35768135167, 95.6323438703],
    [0.00000069283, 2.45721425737, 120.6020670895],
    [0.00000067771, 0.24277166907, 16.9185920399],
    [0.00000071013, 1.85476079726, 24.1352049047],
    [0.00000075802, 1.43483468727, 36.404745446],
    [0.00000079127, 4.41984040421, 5.97595764],
    [0.0000007217, 2.40889219421, 404.2629728647],
    [0.00000067065, 4.84209324295, 28.81562556571],
    [0.00000072371, 5.06657435408, 230.3207533419],
    [0.00000086876, 4.81292247832, 419.72846135871],
    [0.00000062861, 4.86097820142, 202.0095776906],
    [0.00000070935, 2.6737436694, 183.486632131],
    [0.00000069304, 4.51347223027, 333.4135275605],
    [0.00000060612, 4.3123610554, 116.6699138264],
    [0.00000060708, 5.84738885486, 70.35954960481],
    [0.00000070577, 1.23478501009, 70.08436295889],
    [0.00000060413, 2.93879448663, 149.91888920271],
    [0.00000056872, 0.78979170331, 53.93085326429],
    [0.00000056665, 5.11299964404, 79.6912824968],
    [0.00000056672, 0.54290142404, 73.3284950214],
    [0.00000053385, 0.53928334859, 329.48137429739],
    [0.00000060881, 1.12038902225, 126.231141382],
    [0.0000005572, 4.13440106405, 76.72233708021],
    [0.00000055712, 0.10603963574, 157.8837694654],
    [0.00000060449, 4.04220409451, 347.6406215621],
    [0.00000051883, 1.2231141243, 147.3593340633],
    [0.00000053514, 4.48532885411, 433.9555553603],
    [0.00000049248, 3.09071508357, 68.4331339118],
    [0.00000048173, 1.33565042584, 128.7124518316],
    [0.00000057429, 1.7451657884, 19.8875374565],
    [0.00000045855, 1.83493312947, 8.10812400971],
    [0.00000045035, 4.03985804524, 6.86972951729],
    [0.00000045638, 1.36951355984, 415.3086731286],
    [0.00000043941, 4.22289924597, 75.77617557621],
    [0.00000043941, 3.59810035804, 74.2746565254],
    [0.00000052767, 1.19129920562, 147.83490694279],
    [0.00000040257, 2.70867032624, 155.2236405895],
    [0.00000042861, 1.61841225493, 107.2205608554],
    [0.00000039791, 2.79302647335, 258.6319289932],
    [0.00000039522, 4.43426945929, 98.91680347199],
    [0.00000039676, 2.43777338987, 276.79117625789],
    [0.0000004168, 1.56627991706, 272.85902299479],
    [0.00000049985, 6.15572302327, 125.743506415],
    [0.00000039779, 1.76579064544, 143.8691237849],
    [0.00000047193, 4.34084191086, 67.1611095246],
    [0.00000042716, 0.45899696552, 1589.3167127673],
    [0.00000036533, 4.68392419441, 81.61769818981],
    [0.00000046283, 0.57532354052, 62.0076081116],
    [0.00000036873, 2.17201422211, 46.71424039951],
    [0.00000035335, 4.81939505521, 135.7923689376],
    [0.0000003657, 0.97919259316, 167.9662618828],
    [0.00000033878, 2.56857021871, 14.47091148511],
    [0.00000033444, 3.72411302136, 149.6951400335],
    [0.00000040027, 1.962397179, 187.9400502559],
    [0.00000033511, 2.62937481855, 61.01077037031],
    [0.00000037402, 0.21188675855, 259.7527034066],
    [0.00000034209, 3.38154632289, 529.9347825781],
    [0.00000031617, 2.82544568008, 224.1009782184],
    [0.0000004278, 1.30383338598, 58.3506414944],
    [0.00000030892, 1.73608557912, 1052.51220067191],
    [0.00000030724, 5.69827217624, 103.3365917021],
    [0.00000037429, 0.79282523594, 74.13164417351],
    [0.00000037429, 0.74498454647, 75.9191879281],
    [0.00000030708, 0.24881030437, 72.73779419041],
    [0.00000030708, 1.28899947804, 77.3130379112],
    [0.00000035364, 3.42228139592, 82.889722577],
    [0.00000028175, 0.90754643164, 295.4380584896],
    [0.00000029578, 2.34251637992, 1066.7392946735],
    [0.00000029606, 3.07274976796, 121.2352065359],
    [0.0000002877, 5.93764446818, 6.3484646555],
    [0.00000032637, 2.82392002724, 155.53915477459],
    [0.00000031706, 1.92242975115, 38.3768531213],
    [0.00000026723, 4.75188318045, 43.5328466618],
    [0.00000027442, 3.02987836624, 220.1351950605],
    [0.00000036094, 5.82060940307, 340.52707456129],
    [0.00000028308, 1.87170058153, 85.58348134769],
    [0.00000030388, 3.04166414826, 184.97110483931],
    [0.00000033909, 6.02618077188, 171.8984151459],
    [0.00000028512, 5.60849102784, 51.44954281471],
    [0.00000028765, 2.64529774267, 64.97655352819],
    [0.0000003196, 3.10259498469, 221.61966776881],
    [0.00000026763, 0.3681816517, 217.4750661846],
    [0.00000024737, 2.60957039175, 47.9380806769],
    [0.00000031097, 2.39335860911, 98.6012892869],
    [0.00000023919, 5.91490770857, 219.171987214],
    [0.00000029056, 1.38484676611, 106.73292588839],
    [0.00000023488, 0.5741995666, 28.0673581678],
    [0.00000023868, 0.00422826975, 57.4993082325],
    [0.0000002614, 0.5133717722, 91.70019060721],
    [0.00000024837, 2.69236553781, 25.516611749],
    [0.00000028239, 1.50901261149, 131.16013238639],
    [0.00000025242, 6.21367764022, 471.9310244312],
    [0.00000023194, 3.05542590412, 553.82616999929],
    [0.00000023342, 4.42887541532, 61.6920939265],
    [0.00000023751, 4.09923036421, 542.78046973539],
    [0.00000022911, 1.29984079692, 234.149840741],
    [0.0000002226, 6.14564001783, 227.77000692311],
    [0.00000021787, 4.61743304596, 19.36627259471],
    [0.00000020991, 3.73437162386, 316.6356871401],
    [0.00000024652, 5.52981795171, 529.44714761109],
    [0.00000023384, 4.90996648905, 254.6997757301],
    [0.00000021352, 4.81173625387, 7.66618102501],
    [0.000000203, 2.0827247489, 467.9988711681],
    [0.00000021096, 6.10072201079, 141.9427080919],
    [0.00000019957, 4.95453887653, 209.6107596584],
    [0.00000022156, 2.51690657915, 68.5998902506],
    [0.00000027098, 5.67372992575, 111.67397898031],
    [0.00000026932, 6.04273389615, 35.40790770471],
    [0.00000023041, 5.74991815262, 486.1581184328],
    [0.00000023558, 0.87109649175, 195.38366565681],
    [0.00000019352, 2.46209752291, 17.0216579039],
    [0.0000001871, 2.07001816127, 69.91760662011],
    [0.00000018292, 3.74192034003, 46.4536079686],
    [0.00000018185, 1.5355021892, 92.5515238691],
    [0.00000020489, 3.55935460916, 116.12739710521],
    [0.00000018124, 3.38460274859, 88.35873817511],
    [0.00000017311, 3.10967389974, 106.5179854398],
    [0.00000019722, 0.37725290787, 296.4012663361],
    [0.00000017322, 3.58150916447, 100.6282787164],
    [0.00000017131, 4.71716216087, 99.1438060081],
    [0.0000002145, 2.84014990759, 191.45151239371],
    [0.00000016758, 0.69775418663, 210.5739675049],
    [0.00000017082, 5.75097694023, 80.1332254815],
    [0.00000019774, 0.48633289327, 80.7575562073],
    [0.00000018159, 3.24022378066, 151.5039356475],
    [0.00000016166, 4.43388054341, 397.14942586389],
    [0.00000016332, 3.65718289491, 94.6691360238],
    [0.00000017336, 0.34233495912, 13.0895046408],
    [0.000000163, 5.58189501765, 23.87457247379],
    [0.00000018165, 5.60556739075, 198.0774244275],
    [0.00000016506, 4.69351492032, 73.38088464811],
    [0.00000016506, 3.12748016927, 76.6699474535],
    [0.00000018503, 5.93375894816, 156.02678974161],
    [0.00000017934, 3.85540024938, 182.00215942271],
    [0.00000015839, 3.12530503781, 13.73719830221],
    [0.00000015946, 1.30849298209, 55.9029609396],
    [0.00000016546, 5.55355094997, 150.8038523594],
    [0.00000017819, 0.27595854333, 221.40721944771],
    [0.00000015752, 3.89703455623, 67.60305250931],
    [0.00000021162, 1.87088890253, 372.66733761171],
    [0.00000019517, 1.11006773425, 479.044571432],
    [0.00000017205, 2.71359950788, 213.0552779545],
    [0.00000015267, 5.79293754979, 68.1243173711],
    [0.00000015236, 3.72448728433, 30.300098274],
    [0.00000015262, 1.79781862562, 67.424234083],
    [0.00000014562, 3.11386923384, 50.9070260935],
    [0.00000015149, 5.07527743555, 135.5799206165],
    [0.00000015898, 3.22516048145, 174.1860370063],
    [0.00000015347, 0.45031815988, 16.7061437188],
    [0.00000014302, 2.42986138277, 310.41591201661],
    [0.00000017345, 5.49231862434, 261.2371761149],
    [0.00000017208, 0.99198084016, 183.85033042589],
    [0.00000017305, 1.74803865372, 77.5067265004],
    [0.00000014612, 3.56947733384, 30.4668546128],
    [0.00000013603, 2.07215319428, 286.8400387805],
    [0.00000015382, 3.3309943062, 411.3765198655],
    [0.00000013708, 3.5136853345, 352.06040979221],
    [0.00000013683, 3.92221596093, 82.4477795923],
    [0.00000016002, 1.88175647624, 133.13224006171],
    [0.00000013766, 4.97884966758, 44.31474395451],
    [0.00000013284, 2.82193356482, 7.14491616321],
    [0.00000012988, 0.7532280438, 173.9254045754],
    [0.00000017441, 0.75477790662, 60.79832204921],
    [0.00000016261, 1.99911970336, 64.73047531231],
    [0.00000012734, 2.97731330561, 75.54668091261],
    [0.00000012734, 1.70208913039, 74.504151189],
    [0.000000127, 1.71027593315, 57.75994066341],
    [0.00000014302, 0.72178151343, 45.82046852221],
    [0.00000012678, 5.21256052974, 81.9265147305],
    [0.00000016549, 2.78519168402, 760.01171843649],
    [0.0000001272, 2.81709441807, 270.1652642241],
    [0.00000013453, 3.75052891994, 12.28635548869],
    [0.00000012225, 1.22978831724, 284.39235822571],
    [0.00000011971, 1.77290743684, 32.48714639791],
    [0.00000012357, 2.56239278409, 515.70768857651],
    [0.00000012069, 6.21182865124, 633.0275567967],
    [0.00000013087, 1.80415855132, 109.701871305],
    [0.00000011341, 6.09688210298, 189.47940471839],
    [0.00000015361, 0.60509201896, 200.52510498229],
    [0.00000012491, 1.18576138349, 33.9234349964],
    [0.00000014227, 4.47775362086, 203.49405039889],
    [0.00000011094, 2.98683187494, 267.22994870229],
    [0.0000001208, 2.65683685185, 75.6798073566],
    [0.0000001208, 5.16415823774, 74.37102474501],
    [0.00000013196, 1.55647786503, 143.38148881789],
    [0.0000001353, 5.82185773287, 85.3203567893],
    [0.00000010739, 0.2460380062, 94.147871162],
    [0.00000010888, 4.54493098814, 2.7251279331],
    [0.0000001383, 5.36492110746, 31.8964455669],
    [0.00000011969, 4.16293798397, 42.78208713641],
    [0.00000011212, 2.68331450691, 61.5320352321],
    [0.00000011583, 5.07324345893, 124.5342203526],
    [0.00000012891, 4.94162673731, 266.233110961],
    [0.00000010738, 3.2598854978, 35.6685401356],
    [0.00000013803, 4.2379112741, 26.2673712744],
    [0.00000010459, 5.12191321154, 145.1411481721],
    [0.00000010474, 4.75504662292, 692.34366686999],
    [0.00000010123, 5.18571320702, 237.11878615761],
    [0.000000098, 6.07581528627, 92.2908914382],
    [0.00000010121, 1.17089552104, 156.3992967571],
    [0.00000009888, 5.73883644068, 42.88515300039],
    [0.00000010092, 3.96119852956, 215.0273856298],
    [0.00000010098, 1.26158239056, 533.1161763158],
    [0.00000010667, 3.37369147427, 91.8032564712],
    [0.00000010954, 0.56363643422, 89.2525100524],
    [0.0000000963, 4.20178830544, 55.38169607781],
    [0.00000009631, 3.24507538918, 130.6845595069],
    [0.00000009832, 2.83130973684, 54.5785469257],
    [0.00000009739, 5.68100585654, 76.62176334371],
    [0.00000009739, 5.28158188664, 73.4290687579],
    [0.00000010658, 1.14021240327, 31.24875190549],
    [0.00000009264, 0.06980096659, 27.3311528574],
    [0.00000011861, 1.56797219001, 264.2610032857],
    [0.00000009015, 2.20482574279, 17.91542978119],
    [0.0000000917, 2.03311846559, 203.9816853659],
    [0.00000008989, 1.27026973997, 69.12115511239],
    [0.00000009028, 5.58743285195, 141.4550731249],
    [0.00000009664, 2.3917893769, 41.8883152591],
    [0.0000000894, 5.0125646291, 17.28229033479],
    [0.00000010494, 1.17131913276, 624.6756153035],
    [0.00000010035, 3.29686320022, 448.9334088873],
    [0.00000010076, 0.25849068019, 685.2301198692],
    [0.00000008857, 4.96386104548, 44.48150029329],
    [0.00000008598, 6.0660688052, 199.3158189199],
    [0.00000009805, 6.1592374238, 130.1632946451],
    [0.00000008882, 2.75549341652, 105.2484531801],
    [0.00000008882, 2.75549341652, 105.7360881471],
    [0.00000008493, 1.04668491872, 104.2303635794],
    [0.00000008845, 5.13692463782, 88.5187968695],
    [0.00000008246, 2.68751890723, 269.6776292571],
    [0.00000008157, 1.41280465589, 163.82166029861],
    [0.00000008392, 5.8350336976, 681.2979666061],
    [0.00000009056, 2.62794754205, 617.5620683027],
    [0.00000008249, 3.44796441477, 454.6655490438],
    [0.00000008521, 1.30623024759, 155.7449054513],
    [0.00000010211, 1.78694722678, 145.387226388],
    [0.00000007859, 4.05422578891, 119.7507338276],
    [0.00000008216, 1.79455339352, 544.1618765797],
    [0.00000008454, 0.22947250972, 393.2172726008],
    [0.00000008005, 0.46907750935, 141.7302597708],
    [0.00000008848, 3.95115689507, 193.4115579815],
    [0.00000007843, 3.54311700587, 46.8173062635],
    [0.00000007556, 3.58717505818, 66.6734745576],
    [0.00000007436, 1.91784517551, 178.11819026941],
    [0.00000009047, 3.5140114687, 3.42521122121],
    [0.00000007519, 0.50643097415, 341.01470952831],
    [0.00000007416, 3.89859514324, 606.5163680388],
    [0.00000007453, 5.63849048468, 175.40987728371],
    [0.00000007475, 4.80425272291, 58.0754548485],
    [0.00000008741, 4.7863926074, 58.9837809408],
    [0.00000008749, 3.03655779976, 179.9181771628],
    [0.00000007892, 3.40393008709, 207.6386519831],
    [0.00000008402, 6.21287302099, 70.2901136356],
    [0.00000008402, 1.6081220686, 79.76071846601],
    [0.00000008251, 5.10906071911, 58.5630898155],
    [0.0000000814, 2.58466669254, 39.9162075838],
    [0.00000007045, 6.16222014109, 949.4194264533],
    [0.0000000707, 1.85983109705, 610.44852130189],
    [0.00000007791, 4.85392265583, 196.3805033981],
    [0.00000006907, 3.58477670994, 107.74182571721],
    [0.0000000773, 0.65447053669, 111.18634401329],
    [0.00000007449, 2.87976997493, 142.3846510766],
    [0.00000006733, 3.14579027954, 49.75262178531],
    [0.00000007683, 5.01616370789, 201.01273994931],
    [0.00000007711, 4.34156872682, 210.60759739969],
    [0.0000000678, 0.65490353399, 78.6487527732],
    [0.0000000678, 0.88290624842, 71.4020793284],
    [0.00000006908, 0.77950341628, 21.84758304429],
    [0.00000006741, 3.00729837927, 363.1061100561],
    [0.00000006686, 5.64257628839, 109.0687318586],
    [0.00000006572, 4.85673617912, 216.72430665921],
    [0.00000006803, 4.98968550869, 95.47228517591],
    [0.0000000656, 5.82455888933, 117.5636857037],
    [0.00000007044, 4.28026207681, 114.6978061511],
    [0.00000006442, 5.74121457797, 49.47743513939],
    [0.00000006451, 2.26015709937, 118.6299594142],
    [0.00000006473, 0.00551268255, 37.88921815429],
    [0.00000006192, 3.54435368886, 380.847158323],
    [0.00000006192, 5.54162291567, 528.9715747316],
    [0.00000006479, 0.93518082353, 133.34468838281],
    [0.00000006479, 0.93518082353, 132.85705341579],
    [0.00000006351, 0.15072906836, 45.9659730016],
    [0.00000006402, 0.01370420311, 535.6669227346],
    [0.00000007995, 2.91398983172, 35.18090516859],
    [0.00000006129, 4.68773030835, 136.3136337994],
    [0.0000000646, 2.19114059601, 216.2366716922],
    [0.00000006081, 5.0764153047, 530.89799042461],
    [0.00000006081, 4.00956079286, 378.92074262999],
    [0.00000006809, 5.7226349594, 237.4343003427],
    [0.00000007057, 3.30830104174, 526.7533888404],
    [0.000000071, 4.41290399848, 71.5688356672],
    [0.00000006155, 5.05323034597, 142.9059159384],
    [0.00000006607, 1.89479128516, 192.448350135],
    [0.00000006635, 3.99115479596, 34.28713329129],
    [0.00000006319, 3.57711620849, 143.5872394946],
    [0.000000062, 5.67320056167, 455.1531840108],
    [0.00000006495, 3.28083835466, 24.6228398717],
    [0.00000007911, 2.50242282775, 77.7191748215],
    [0.00000005852, 4.64831077945, 405.747445573],
    [0.00000006837, 6.06157563262, 375.6362830283],
    [0.00000005864, 5.60462038691, 108.1625168425],
    [0.00000007485, 1.15010416646, 48.51422729289],
    [0.00000005956, 4.74593134277, 28.98238190449],
    [0.00000006512, 5.04955849957, 549.8940167362],
    [0.00000006744, 1.0807200451, 27.96429230381],
    [0.00000005515, 2.08339216933, 232.66536803271],
    [0.00000005532, 0.31890406514, 164.78486814511],
    [0.00000006345, 2.71756249318, 91.48774228611],
    [0.0000000649, 1.76744850978, 180.03005174739],
    [0.00000005431, 0.43190359607, 28.5549931348],
    [0.00000005425, 4.51559573958, 73.6528179271],
    [0.00000005425, 0.16380669642, 76.3980141745],
    [0.00000005562, 5.40559445337, 125.42799222991],
    [0.00000005415, 0.23454091581, 15.7978176265],
    [0.00000006477, 3.03489812985, 91.06705116081],
    [0.00000005588, 2.33528771267, 408.19512612779],
    [0.00000005776, 4.10655662159, 218.6507223522],
    [0.0000000535, 5.53830738326, 30.9881194746],
    [0.00000005255, 4.37451988017, 49.42255338521],
    [0.00000005759, 4.69888388132, 35.9291725665],
    [0.00000005412, 0.49313502322, 22.3900997655],
    [0.0000000677, 2.47861246297, 118.15438653471],
    [0.0000000538, 2.58879305933, 234.252906605],
    [0.00000005209, 6.26374262154, 210.36151918381],
    [0.00000005177, 2.42407399027, 34.86539098351],
    [0.0000000516, 0.76362512485, 312.21589891],
    [0.00000005191, 2.89795037802, 853.4401992355],
    [0.00000005099, 5.9675988976, 248.9676355736],
    [0.00000005267, 3.95527262737, 167.07249000551],
    [0.00000005553, 4.22057884827, 756.07956517339],
    [0.00000005467, 4.39069254467, 301.17019864609],
    [0.00000004979, 0.39632287951, 82.6145359311],
    [0.0000000489, 4.28174925638, 114.38229196601],
    [0.00000004949, 2.3278068836, 72.090100529],
    [0.00000006602, 3.50824637161, 123.2958258602],
    [0.00000006602, 3.50824637161, 123.78346082721],
    [0.0000000537, 2.46922478726, 293.95358578131],
    [0.00000005201, 3.74659188258, 67.1154175423],
    [0.00000005872, 0.96808951269, 406.3469551246],
    [0.0000000525, 0.24305505446, 830.8611637407],
    [0.00000004889, 0.96967547082, 319.3294459108],
    [0.00000005168, 2.97658265378, 148.11009358871],
    [0.00000006514, 2.35520859919, 302.3391571693],
    [0.0000000508, 1.86039634355, 163.1403367424],
    [0.00000004695, 1.08205169196, 105.13657859549],
    [0.00000005583, 1.97933911711, 283.9047232587],
    [0.00000004645, 1.73959984601, 87.87110320809],
    [0.00000005916, 0.89454328694, 117.6667515677],
    [0.00000004506, 4.68119964918, 100.2982103163],
    [0.00000004545, 1.88213954631, 52.3914988018],
    [0.00000004927, 1.8409301086, 78.4699343469],
    [0.00000005394, 4.06857911814, 231.8052260502],
    [0.00000005223, 1.80728120886, 376.7025567388],
    [0.00000004438, 3.54909482913, 748.9660181726],
    [0.00000005514, 4.87130555529, 281.210964488],
    [0.00000005215, 1.0988850399, 336.5949212982],
    [0.00000005879, 3.19764906565, 402.77850015639],
    [0.0000000542, 2.6687833945, 322.3678272966],
    [0.00000004308, 4.56314648517, 122.71967924421],
    [0.00000004264, 3.90016849877, 257.14745628489],
    [0.0000000452, 1.632484918, 49.0018622599],
    [0.00000004775, 3.17635591657, 57.86300652739],
    [0.00000004774, 5.4370479978, 827.67977000299],
    [0.00000004196, 3.75278965356, 222.14093263061],
    [0.00000004391, 3.97300698545, 103.597224133],
    [0.00000005698, 0.61058889672, 43.84836084689],
    [0.00000004161, 3.08172700119, 43.79347909271],
    [0.00000004435, 5.04812695927, 102.11275142471],
    [0.00000004326, 3.8665143025, 25.3590451821],
    [0.00000004344, 4.06256630733, 49.8956341372],
    [0.00000005029, 0.85995505548, 189.42452296421],
    [0.00000004148, 2.58868726006, 271.3745502865],
    [0.00000004154, 1.32034817135, 170.41394243761],
    [0.00000005131, 3.49343840091, 107.2687449652],
    [0.00000004194, 5.1067890778, 383.0653442142],
    [0.00000004307, 3.42628980232, 106.0303504728],
    [0.00000004419, 2.19876844402, 422.42222012939],
    [0.00000004369, 5.90195130694, 596.1183614363],
    [0.00000004317, 5.38430845148, 610.3454554379],
    [0.00000003889, 3.08485433387, 501.62360692681],
    [0.0000000387, 1.71101422686, 196.01680510321],
    [0.00000004439, 3.94878447089, 302.13340649259],
    [0.00000005072, 5.15076461582, 841.9068640046],
    [0.0000000457, 5.48306410732, 25.3041634279],
    [0.00000003853, 1.39776017808, 327.9969015891],
    [0.00000004468, 2.5486079186, 20.953811167],
    [0.00000003811, 4.72636380146, 121.59890483079],
    [0.00000004526, 5.54057803341, 223.20720634109],
    [0.00000004482, 5.83135585848, 30.3549800282],
    [0.00000003991, 1.28311117198, 227.03629374021],
    [0.00000003731, 6.12095489341, 379.8839504765],
    [0.00000003956, 4.56824830678, 995.88984936931],
    [0.00000003718, 3.65666608721, 323.74923414091],
    [0.00000004018, 3.19895348695, 136.78920667889],
    [0.00000004001, 3.56100095575, 1887.5493351592],
    [0.00000003691, 1.41771281486, 219.275053078],
    [0.00000004238, 1.44245928396, 487.6425911411],
    [0.00000004319, 0.96541270679, 470.44655172289],
    [0.00000003696, 4.06633350945, 95.7354097343],
    [0.00000003585, 3.51009891487, 647.25465079831],
    [0.00000003615, 0.20591103864, 38.85242600079],
    [0.00000004508, 2.9054635014, 763.1931121742],
    [0.00000004774, 2.46832397929, 205.9417309537],
    [0.00000003585, 1.34007514641, 819.8154634768],
    [0.00000003631, 2.10367195809, 310.73142620169],
    [0.00000003713, 4.67112895523, 906.60597015449],
    [0.00000004069, 5.59978544475, 331.9290548522],
    [0.00000003909, 2.27593546539, 204.9448932124],
    [0.00000003826, 6.01055375896, 253.2153030218],
    [0.00000004459, 0.93566957933, 49.26498681829],
    [0.00000003398, 2.96372890711, 548.0940298428],
    [0.0000000444, 1.94179155953, 54.89406111079],
    [0.00000003614, 0.30233234299, 511.2879003464],
    [0.00000003347, 1.29886958053, 672.3844327119],
    [0.00000003809, 4.5117873873, 328.5964111407],
    [0.00000003555, 3.61696917256, 1368.9040703285],
    [0.00000004016, 1.13955629148, 442.9955180541],
    [0.00000003311, 3.53242079712, 185.2317372702],
    [0.00000003338, 2.31470330186, 90.2157178989],
    [0.00000003346, 5.43284733631, 10022.0810975829],
    [0.00000003379, 2.85060290289, 1051.0277279636],
    [0.00000003359, 5.72116664423, 40.8245336761],
    [0.00000003472, 2.97502666152, 141.8970161096],
    [0.0000000347, 4.38415952735, 1068.22376738181],
    [0.00000003246, 4.22017131096, 30.9332377204],
    [0.00000003583, 1.73082339999, 297.9888049084],
    [0.00000004055, 0.36258365907, 228.83628063359],
    [0.00000003241, 0.13111768083, 34.44469985821],
    [0.00000003616, 1.14515654777, 736.1203310153],
    [0.0000000356, 0.27670779076, 334.89800026879],
    [0.00000004091, 1.17441098516, 913.5070688342],
    [0.00000003191, 1.16792482, 374.46732450509],
    [0.00000003544, 0.49055376796, 484.6736457245],
    [0.00000003559, 2.60397878803, 781.8399944059],
    [0.00000003813, 6.05894981328, 342.0115472696],
    [0.00000003256, 5.96135741097, 97.17169833279],
    [0.00000003256, 5.96135741097, 97.65933329981],
    [0.00000003853, 0.47025651359, 122.08653979781],
    [0.00000004122, 2.34292957523, 339.042601853],
    [0.00000003135, 1.41353750131, 674.1844196053],
    [0.00000003359, 0.15532049803, 369.8014580591],
    [0.00000004038, 2.3472033893, 146.3504342345],
    [0.0000000401, 6.22343326461, 60.52313540329],
    [0.00000003941, 1.29255732924, 729.0067840145],
    [0.00000003097, 5.41601825571, 115.1854411181],
    [0.00000003291, 1.11683648084, 2424.3538472546],
    [0.00000003582, 6.04348598778, 349.12509427039],
    [0.00000003393, 1.72165904584, 290.8752579076],
    [0.00000003127, 2.23294920715, 582.13734565059],
    [0.00000003177, 0.19583207281, 194.5323323949],
    [0.00000003592, 2.40358939188, 1512.56300652469],
    [0.00000003448, 2.88793959605, 630.5798762419],
    [0.00000003156, 5.0336193245, 555.3106427076],
    [0.00000003587, 0.58158301767, 333.0498292656],
    [0.00000003671, 1.45655426897, 480.52904414029],
    [0.00000003505, 1.6483841651, 52.13086637091],
    [0.00000003028, 6.26872130718, 260.1164017015],
    [0.00000003021, 5.57108092759, 745.03386490949],
    [0.00000003015, 3.89416639328, 1053.9966733802],
    [0.00000003255, 3.12462674297, 114.1216595351],
    [0.00000003582, 5.88445674452, 292.9446859525],
    [0.00000004061, 3.95340643388, 758.5272457282],
    [0.00000003736, 0.36613852781, 5983.7056382387],
    [0.00000003303, 1.28155244731, 532.3824631329],
    [0.00000004088, 5.55402436617, 1265.0605365845],
    [0.0000000296, 1.72706602311, 15.7429358723],
    [0.00000003705, 1.47926124922, 604.7163811454],
    [0.00000003156, 5.92521270548, 657.4065791849],
    [0.00000003133, 5.04870054324, 346.1561488538],
    [0.00000003653, 0.63048648313, 601.7474357288],
    [0.00000003119, 1.91614513517, 969.37866061139],
    [0.00000002876, 2.35938981628, 61.0444002651],
    [0.00000002838, 2.74193803313, 595.1551535898],
    [0.00000003359, 4.95035468643, 229.0420313103],
    [0.00000003882, 1.38177660207, 275.7943385166],
    [0.00000003259, 1.01400972497, 184.48346987229],
    [0.00000003003, 1.83095192956, 531.73476947149],
    [0.00000002904, 4.01411287559, 90.52453443961],
    [0.00000003653, 2.96914294937, 34.9202727377],
    [0.00000003037, 5.20432039185, 432.574148516],
    [0.00000002813, 4.72918594081, 106.2573530089],
    [0.00000003621, 3.22439526217, 156.9205616189],
    [0.00000003602, 3.15871536713, 162.6527017754],
    [0.00000003499, 2.67172150269, 296.50433220009],
    [0.00000003773, 4.08436936009, 357.79254994869],
    [0.00000003503, 1.7895486542, 9913.91533445829],
    [0.00000003442, 3.60672329365, 689.1622731323],
    [0.00000002741, 1.22562559151, 279.9725699956],
    [0.00000002811, 1.78185455227, 526.00262931501],
    [0.00000002811, 4.92344720586, 525.514994348],
    [0.00000002855, 5.71771141107, 49.1619209543],
    [0.00000003389, 4.6725970945, 1471.2460850217],
    [0.00000002713, 5.5642866595, 395.6649531556],
    [0.00000002786, 1.34350771854, 121.4958389668],
    [0.00000002898, 6.21681698735, 101.04896984171],
    [0.00000002865, 6.01164299992, 525.4813644532],
    [0.00000003424, 5.73901886785, 1065.35788782919],
    [0.00000002851, 0.54853216378, 344.9468627914],
    [0.00000003251, 1.45328025834, 4.2096006414],
    [0.00000002737, 3.42458700601, 1065.2548219652],
    [0.0000000295, 4.98027465475, 256.08118257441],
    [0.00000002631, 0.78267027234, 833.30884429549],
    [0.00000003298, 5.06593115911, 469.48334387639],
    [0.00000003109, 6.28117696143, 626.16008801179],
    [0.00000003056, 3.6846309673, 222.6165055101],
    [0.00000002887, 2.43495358759, 241.3664536058],
    [0.0000000288, 3.6858968752, 370.2196570569],
    [0.00000002756, 3.92430653721, 103.7639804718],
    [0.00000002886, 2.58668498001, 668.4522794488],
    [0.00000003592, 0.47803095441, 1062.59469308931],
    [0.00000003123, 5.91118856963, 384.02855206069],
    [0.0000000275, 1.59375992485, 628.6077685666],
    [0.00000002877, 2.89340756487, 6058.48723680599],
    [0.00000002805, 2.02053605529, 2111.8941308611],
    [0.00000002563, 3.56308780594, 440.43845504219],
    [0.00000002563, 0.42149515235, 440.9260900092],
    [0.00000002696, 2.96689095835, 187.78248368899],
    [0.00000002619, 4.26306664613, 218.1630873852],
    [0.0000000325, 2.54781834108, 608.9640485936],
    [0.00000002535, 4.28939637077, 546.71262299849],
    [0.00000002863, 2.93725449249, 637.69342324271],
    [0.0000000251, 2.72205634566, 1258.6977491091],
    [0.00000002502, 0.12173637336, 766.128427696],
    [0.00000002501, 3.95752847987, 108.2173985967],
    [0.00000002522, 4.54787198105, 115.6061322434],
    [0.00000002695, 1.46434656788, 592.1862081732],
    [0.0000000276, 1.05454060387, 631.7891623043],
    [0.00000002903, 2.53838707555, 620.4973838245],
    [0.00000002884, 4.72874609806, 5.1728084879],
    [0.0000000289, 3.31519233579, 361.62163734781],
    [0.00000002464, 3.09248623775, 416.79314583689],
    [0.00000003268, 2.53292811337, 39.3736908626],
    [0.00000002473, 0.08779249635, 368.83825021259],
    [0.00000003222, 0.65044985311, 421.212934067],
    [0.00000002626, 1.10132862735, 135.8259988324],
    [0.00000002497, 2.08712349497, 109.2262984255],
    [0.00000002634, 0.11373538142, 159.47130803769],
    [0.00000003221, 0.89035575469, 124.2590337067],
    [0.00000002517, 4.16137803488, 389.9664428939],
    [0.00000002921, 3.40506832572, 109.9625037359],
    [0.00000003208, 4.58577380818, 436.50630177909],
    [0.00000002416, 3.47591283723, 531.4192552864],
    [0.00000003214, 2.54161801429, 256.18424843839],
    [0.00000002505, 3.995346214, 460.8853241673],
    [0.00000002681, 4.31478466061, 9988.69693302559],
    [0.00000002782, 0.78003425566, 947.28726008359],
    [0.00000002409, 5.18542514143, 1228.25440708809],
    [0.00000002353, 5.50653116579, 75.2378643719],
    [0.00000002353, 5.45605657739, 74.81296772971],
    [0.0000000244, 5.74974436995, 894.5970620441],
    [0.00000002656, 3.45452000558, 623.4663292411],
    [0.00000002337, 2.77425938866, 533.8669358412],
    [0.00000002402, 1.96391904397, 843.8789716799],
    [0.00000003239, 5.50110511166, 956.53297345411],
    [0.00000003017, 1.71602977265, 2043.73844432759],
    [0.00000003017, 4.85762242624, 2044.2260792946],
    [0.00000002405, 0.69226746482, 59.038662695],
    [0.00000002405, 0.69226746482, 59.526297662],
    [0.00000002976, 4.98106512921, 80.65449034331],
    [0.00000002378, 2.81529183944, 223.6254053389],
    [0.00000002317, 1.17777954553, 247.2225304344],
    [0.00000002571, 1.895734464, 595.47066777489],
    [0.00000002545, 0.4213920883, 450.2121309189],
    [0.00000002346, 1.76423659089, 60.3106870822],
    [0.00000002905, 5.55552157075, 344.45922782439],
    [0.00000002979, 1.2704870258, 370.3227229209],
    [0.000000024, 1.68813814874, 14.7340360435],
    [0.00000002717, 1.31138458381, 479.6440809836],
    [0.00000002611, 0.9938801432, 3116.0238135144],
    [0.00000002621, 0.25841040278, 78.99119920869],
    [0.00000002223, 1.90165447185, 53.82778740031],
    [0.00000002402, 5.03538910572, 298.8825767857],
    [0.0000000299, 3.95961598379, 1812.2801016249],
    [0.00000002451, 1.91418865833, 230.8083883089],
    [0.00000002234, 2.22641223106, 6144.3145356372],
    [0.00000002327, 1.84267006744, 756.56720014041],
    [0.00000002505, 5.12227466803, 98.6561710411],
    [0.00000002409, 1.84825229471, 248.48000060659],
    [0.00000002564, 0.59724352209, 554.31380496631],
    [0.00000002094, 5.43602058182, 451.2210307477],
    [0.00000002094, 5.43602058182, 450.73339578069],
    [0.00000002295, 2.50743217001, 767.1252654373],
    [0.00000002295, 2.50743217001, 767.61290040431],
    [0.00000002066, 1.46552725443, 518.40144734719],
    [0.00000002066, 1.46552725442, 518.8890823142],
    [0.00000002137, 1.06481249549, 192.935985102],
    [0.00000002874, 1.4220151345, 1336.1731064471],
    [0.00000002325, 5.15816119219, 217.16624964391],
    [0.00000002325, 2.0165685386, 216.67861467689],
    [0.00000002567, 2.28998100536, 980.4243608753],
    [0.00000002617, 5.90003632196, 130.1969245399],
    [0.00000002128, 5.11811294529, 180.51768671441],
    [0.00000002474, 2.38064815315, 124.7466686737],
    [0.00000002195, 5.26620078093, 449.5241097183],
    [0.00000002195, 5.26620078093, 449.0364747513],
    [0.00000002135, 5.71566208623, 112.6708167216],
    [0.00000001942, 5.33502835135, 196.8681383651],
    [0.00000001912, 3.62510337339, 119.1175943812],
    [0.00000002139, 6.13537221304, 179.0332140061],
    [0.00000002139, 2.99377955945, 178.5455790391],
    [0.0000000195, 5.27659816322, 39.1130584317],
    [0.00000001854, 0.40784304859, 355.2418035299],
    [0.00000001854, 3.54943570218, 354.75416856289],
    [0.00000001854, 3.15413689271, 198.82818395289],
    [0.00000001965, 2.90831551828, 84.0990086394],
    [0.00000002359, 6.02456565449, 31.73638687251],
    [0.00000001903, 4.02163891252, 153.25153291419],
    [0.00000002125, 4.46822209107, 490.5779066629],
    [0.00000002125, 1.32662943748, 490.09027169589],
    [0.00000001914, 2.80943361629, 331.45348197271],
    [0.00000001914, 2.80943361629, 330.9658470057],
    [0.00000002417, 3.62587768999, 139.7581520955],
    [0.00000002146, 4.8006024986, 463.2635687529],
    [0.00000002146, 4.8006024986, 463.75120371991],
    [0.00000001907, 0.29413995146, 458.12212942741],
    [0.00000001907, 0.29413995146, 457.6344944604],
    [0.00000001967, 5.78363534283, 180.81194904009],
    [0.00000001967, 2.64204268924, 181.2995840071],
    [0.00000002145, 0.14136422951, 66.42739634171],
    [0.00000002145, 3.2829568831, 65.9397613747],
    [0.00000001797, 2.3994452266, 757.5640378817],
    [0.00000001797, 2.39944522659, 758.0516728487],
    [0.0000000175, 4.28600192557, 144.8659615262],
    [0.00000002036, 2.34392479937, 304.1055141679],
    [0.00000002036, 2.34392479937, 303.6178792009],
    [0.00000001797, 0.32134026487, 704.8738398422],
    [0.00000001797, 0.32134026487, 705.36147480921],
    [0.00000001894, 0.87966092565, 910.0625505381],
    [0.00000001894, 0.87966092565, 909.5749155711],
    [0.00000001722, 5.49208647911, 67.6366824041],
    [0.00000001837, 6.09149650375, 544.2649424437],
    [0.00000001837, 2.94990385016, 544.7525774107],
    [0.00000001726, 6.2824511506, 1507.42156719921],
    [0.00000001726, 3.14085849702, 1506.93393223219],
    [0.0000000173, 6.03213855973, 565.35950523021],
    [0.0000000173, 2.89054590614, 564.8718702632],
    [0.00000001877, 0.39026248475, 582.62498061761],
    [0.00000001795, 0.24875732404, 681.7856015731],
    [0.00000001921, 5.53736958606, 699.4572138708],
    [0.00000001983, 2.54851132238, 256.78375799],
    [0.00000001983, 5.69010397597, 256.296123023],
    [0.00000001763, 0.62072025706, 1521.6486612008],
    [0.00000001763, 3.76231291065, 1521.16102623379],
    [0.00000002238, 3.66188523153, 699.94484883781],
    [0.00000001965, 0.50815651093, 1317.26309965699],
    [0.00000001965, 0.50815651092, 1317.75073462401],
    [0.00000001641, 2.64526934415, 76.9854616386],
    [0.00000001645, 3.22138588883, 237.9219353097],
    [0.0000000188, 1.89024853051, 71.3563873461],
    [0.00000002123, 3.24947752102, 528.4503098698],
    [0.00000002123, 0.10788486743, 527.9626749028],
    [0.00000002071, 0.60877130052, 688.41151360689],
    [0.00000002071, 3.75036395411, 688.89914857391],
    [0.00000002066, 5.47736990001, 182.998997164],
    [0.0000000208, 4.96628697356, 415.7963080956],
    [0.0000000161, 5.00948478905, 173.6984020393],
    [0.00000001624, 2.10483095182, 683.74564716089],
    [0.00000001624, 2.10483095182, 684.23328212791],
    [0.00000001582, 0.6415546264, 349.0914643756],
    [0.00000001582, 0.6415546264, 348.6038294086],
    [0.00000001525, 3.24207905299, 555.7982776746],
    [0.00000001823, 5.40830199356, 290.46337550291],
    [0.00000001823, 5.40830199356, 289.97574053589],
    [0.00000001524, 1.14769098014, 1303.0360056554],
    [0.00000001524, 1.14769098014, 1303.52364062241],
    [0.00000001902, 5.79795457847, 351.5727748252],
    [0.00000001683, 3.65104607633, 477.5600987237],
    [0.00000001683, 0.50945342274, 478.0477336907],
    [0.00000001652, 5.08038518118, 473.9031321065],
    [0.00000001652, 1.93879252759, 473.4154971395],
    [0.00000001475, 2.15788763961, 406.71065341949],
    [0.00000001475, 5.2994802932, 407.1982883865],
    [0.00000001473, 4.76013578848, 376.4394321804],
    [0.00000001473, 1.61854313489, 375.9517972134],
    [0.00000001646, 3.41010170818, 330.080883849],
    [0.00000001646, 0.2685090546, 329.593248882],
    [0.00000002036, 3.5139168703, 402.4629859713],
    [0.00000002036, 3.5139168703, 401.9753510043],
    [0.00000001806, 1.95017105531, 105.6242135625],
    [0.00000001436, 4.41744820869, 384.3037387066],
    [0.00000001436, 4.41744820869, 383.81610373959],
    [0.00000001436, 4.16082568297, 192.5602247196],
    [0.00000001436, 4.16082568297, 193.0478596866],
    [0.00000001579, 3.84792179756, 74.6496556684],
    [0.00000001983, 5.87547482444, 28.32799059869],
    [0.00000001517, 3.89748087769, 696.7634551001],
    [0.00000001517, 3.89748087769, 696.2758201331],
    [0.00000001512, 5.37436432179, 482.9767246951],
    [0.00000001512, 2.2327716682, 483.4643596621],
    [0.00000001507, 1.08636660761, 420.9377474211],
    [0.00000001507, 4.2279592612, 421.4253823881],
    [0.00000001461, 3.02594666056, 6208.5380689076],
    [0.00000001461, 6.16753931415, 6208.0504339406],
    [0.00000001593, 4.09159297487, 1441.237988341],
    [0.00000001593, 4.09159297487, 1440.750353374],
    [0.00000001473, 5.46192054865, 818.33099076849],
    [0.00000001473, 5.46192054865, 818.8186257355],
    [0.00000001672, 2.1006120049, 1598.71788162851],
    [0.00000001672, 2.1006120049, 1598.23024666149],
    [0.00000001531, 5.12947393362, 1737.9861380246],
    [0.00000001531, 1.98788128003, 1737.49850305759],
    [0.00000001912, 5.9768443041, 486.64575339981],
];

const X2: &[Term] = &[
    [0.0101661895, 0.77056492682, 75.0254160508],
    [0.00038040244, 1.27157972349, 0.2438174835],
    [0.00034677856, 3.16763307609, 149.8070146181],
    [0.00012364786, 5.85713505816, 76.50988875911],
    [0.00007910801, 3.80553695138, 11.2895177474],
    [0.00007671667, 2.54030927271, 63.9797157869],
    [0.00005406463, 4.76691460989, 71.09326278771],
    [0.0000700765, 5.30773139768, 86.07111631471],
    [0.00004975036, 3.03470499387, 78.9575693139],
    [0.00003201017, 6.01127265738, 74.53778108379],
    [0.00003151344, 4.54344132198, 73.5409433425],
    [0.00002824019, 4.03409221161, 138.76131435421],
    [0.00003389631, 0.43008591381, 1.7282901918],
    [0.00002518149, 3.3577914869, 71.8440223131],
    [0.00002418298, 4.45586602451, 78.2068097885],
    [0.00002201666, 0.8621617757, 4.1759707466],
    [0.00001870514, 5.78094816572, 224.5886131854],
    [0.00001040809, 0.72139231899, 145.874861355],
    [0.00000825679, 4.574047087, 148.32254190981],
    [0.00000856424, 2.19300534976, 151.2914873264],
    [0.00000661761, 1.01323912739, 18.40306474821],
    [0.00000687998, 4.9341144942, 77.9943614674],
    [0.00000504683, 5.29540359205, 22.3352180113],
    [0.00000477418, 3.17731628846, 72.577735496],
    [0.00000476558, 1.85582546952, 2.9375762542],
    [0.00000417277, 1.55648119928, 160.852714882],
    [0.00000385934, 4.71654989644, 77.4730966056],
    [0.00000325076, 0.00844871452, 65.46418849521],
    [0.00000284902, 0.53316205138, 131.6477673534],
    [0.00000257868, 4.97326431366, 56.8661687861],
    [0.0000033426, 5.52076636592, 3.21276290011],
    [0.0000022724, 2.58050408018, 127.71561409031],
    [0.00000308306, 1.74334590495, 84.5866436064],
    [0.00000220448, 3.46259685462, 220.6564599223],
    [0.00000207595, 2.68871981891, 12.77399045571],
    [0.0000020641, 2.89659870733, 93.1846633155],
    [0.00000207522, 1.83273630503, 213.5429129215],
    [0.00000209061, 5.56996462509, 153.73916788121],
    [0.00000215886, 1.45032322858, 72.05647063421],
    [0.00000212084, 4.24531706023, 87.555589023],
    [0.00000208906, 5.76818344719, 52.446380556],
    [0.00000151875, 1.37030417137, 206.42936592071],
    [0.00000148298, 1.59631432822, 9.8050450391],
    [0.00000192262, 2.16356274415, 529.9347825781],
    [0.00000119051, 2.12938419254, 299.37021175271],
    [0.00000132408, 0.84833790409, 52.934015523],
    [0.00000117583, 4.12588726472, 522.8212355773],
    [0.0000011453, 0.20480870043, 537.0483295789],
    [0.00000105238, 0.95165369617, 127.22797912329],
    [0.00000098089, 2.01372348892, 80.44204202221],
    [0.0000011425, 1.45343138159, 7.3573644843],
    [0.00000097881, 0.88047242223, 97.11681657861],
    [0.00000106194, 5.89144138305, 146.6256208804],
    [0.00000089216, 2.74785227203, 67.91186905],
    [0.0000011634, 0.5988135491, 38.3768531213],
    [0.00000077574, 4.98371791372, 82.13896305161],
    [0.00000084483, 0.53008500607, 223.1041404771],
    [0.00000098707, 3.60232211559, 62.4952430786],
    [0.00000068606, 2.46240164068, 426.8420083595],
    [0.00000066709, 5.05989525693, 2.69149803831],
    [0.00000065809, 3.54607627462, 15.2216710105],
    [0.00000067096, 4.82707195481, 226.07308589371],
    [0.00000087378, 5.70834290687, 39.86132582961],
    [0.00000062935, 2.33622388716, 149.3193796511],
    [0.00000061638, 2.56105139517, 152.9884083558],
    [0.00000065914, 3.96068940502, 79.47883417571],
    [0.00000059769, 2.39173625701, 10.8018827804],
    [0.00000059691, 2.89597337716, 56.3785338191],
    [0.00000056598, 1.25875671662, 152.77596003471],
    [0.00000052271, 5.01620205161, 70.6056278207],
    [0.00000067381, 4.08745585432, 111.67397898031],
    [0.00000048944, 1.98442603431, 63.49208081989],
    [0.00000048935, 4.54101314556, 194.89603068979],
    [0.00000058953, 2.87996709683, 34.9202727377],
    [0.00000042178, 5.74275407313, 146.8380692015],
    [0.00000041131, 0.64777803124, 209.12312469139],
    [0.00000048341, 6.17208956617, 142.6934676173],
    [0.00000039938, 3.21570509181, 29.44876501211],
    [0.00000035504, 4.35546434528, 73.0533083755],
    [0.00000035998, 5.79742738847, 69.6087900794],
    [0.00000035709, 1.54618860768, 45.3328335552],
    [0.00000034365, 3.33620594444, 70.5719979259],
    [0.00000040938, 4.61497618218, 4.6972356084],
    [0.00000033246, 5.01331392267, 1059.6257476727],
    [0.00000034076, 5.46577508001, 137.2768416459],
    [0.00000034342, 6.08604337798, 5.6604434549],
    [0.0000003475, 2.99991330176, 120.1144321225],
    [0.00000029609, 4.3133358278, 134.8291610911],
    [0.00000029214, 4.33169131521, 134.3415261241],
    [0.00000027728, 0.58899684764, 202.4972126576],
    [0.00000026015, 1.4466796768, 20.850745303],
    [0.00000025423, 4.18101350243, 23.81969071961],
    [0.0000002536, 1.97190987769, 60.04756252381],
    [0.00000027639, 0.63901286173, 152.2546951729],
    [0.00000024633, 1.98871425552, 59.55992755679],
    [0.00000026033, 4.07056770292, 235.6343134493],
    [0.00000022264, 5.20786731153, 76.0222537921],
    [0.00000020549, 5.58659383272, 138.2736793872],
    [0.00000022051, 0.79574466032, 33.3809182752],
    [0.00000019406, 3.47975672795, 159.36824217371],
    [0.0000002019, 1.31242826249, 70.35954960481],
    [0.00000022751, 5.38605025058, 110.189506272],
    [0.00000020572, 4.61541897614, 120.6020670895],
    [0.0000001901, 1.13202069249, 14.47091148511],
    [0.00000018238, 0.76330726538, 3.6883357796],
    [0.00000018044, 2.65389705259, 265.745475994],
    [0.00000018132, 5.82700586339, 90.0032695778],
    [0.00000018837, 3.36592790957, 79.6912824968],
    [0.00000017966, 2.30154733724, 73.3284950214],
    [0.00000017619, 2.37679027189, 76.72233708021],
    [0.00000015431, 5.76818140157, 1.24065522479],
    [0.00000017688, 4.07867858977, 41.4006802921],
    [0.00000015101, 4.88508430106, 16.9185920399],
    [0.00000015248, 6.07362345688, 3.42521122121],
    [0.00000014771, 6.23530181561, 333.4135275605],
    [0.00000014325, 6.07731251478, 19.8875374565],
    [0.00000013703, 5.74950760055, 116.18227885939],
    [0.00000015398, 0.55165142555, 162.3371875903],
    [0.00000013837, 2.81469028445, 433.9555553603],
    [0.00000013525, 1.82049184184, 144.39038864671],
    [0.00000015125, 5.47781650962, 147.3593340633],
    [0.00000015394, 4.7563045617, 41.3457985379],
    [0.00000013487, 2.33365398351, 347.6406215621],
    [0.00000017344, 1.14035051184, 190.9638774267],
    [0.00000012741, 0.49316850236, 419.72846135871],
    [0.00000015299, 1.30791646464, 184.97110483931],
    [0.00000014796, 2.98132078729, 113.15845168861],
    [0.00000011042, 0.89444511328, 25.516611749],
    [0.00000010803, 6.10809462182, 140.2457870625],
    [0.00000010475, 2.21239506785, 6.86972951729],
    [0.00000011185, 0.75741549234, 116.6699138264],
    [0.00000011147, 4.98644870698, 54.41848823131],
    [0.00000013346, 4.08247597684, 33.43580002939],
    [0.00000009592, 1.22752159642, 212.05844021321],
    [0.00000010605, 0.82432336974, 74.91354146621],
    [0.00000010593, 3.85979493686, 75.1372906354],
    [0.00000011833, 2.92629549746, 89.0400617313],
    [0.00000009674, 0.15663016702, 129.2000867986],
    [0.00000009261, 5.39380503857, 167.9662618828],
    [0.00000009431, 1.62655798238, 640.1411037975],
    [0.00000010948, 5.84704956948, 202.0095776906],
    [0.0000001047, 3.21728620233, 71.5688356672],
    [0.00000008486, 2.7106494959, 277.2788112249],
    [0.0000000914, 1.81085828444, 228.5207664485],
    [0.00000008941, 4.65640678923, 258.6319289932],
    [0.0000000814, 2.93786869433, 60.79832204921],
    [0.00000007518, 3.7239891972, 126.231141382],
    [0.00000007532, 4.8417145896, 89.2525100524],
    [0.00000007736, 6.1474680179, 272.85902299479],
    [0.00000008693, 1.27494883068, 221.61966776881],
    [0.00000006861, 3.28548607175, 195.38366565681],
    [0.00000008704, 0.49510828703, 50.9619078477],
    [0.00000007676, 3.18883684041, 58.3506414944],
    [0.00000007545, 2.72894616317, 53.93085326429],
    [0.00000007394, 2.88313029524, 95.6323438703],
    [0.00000006681, 5.42279212849, 66.9486612035],
    [0.00000006264, 1.99748477436, 39.6006933987],
    [0.00000007026, 1.90422724178, 51.44954281471],
    [0.0000000615, 4.80885665481, 374.15181032],
    [0.00000006356, 4.5211191701, 155.2236405895],
    [0.00000005982, 2.01491416824, 125.743506415],
    [0.00000006068, 0.40878107182, 135.5799206165],
    [0.00000006766, 1.53737992411, 151.5039356475],
    [0.00000007931, 3.18839879732, 288.32451148881],
    [0.00000006447, 2.96047986448, 297.8857390444],
    [0.00000006043, 0.77132741272, 1066.7392946735],
    [0.00000005769, 0.22669318121, 213.0552779545],
    [0.00000005884, 0.89035454231, 24.1352049047],
    [0.0000000576, 0.98271147838, 103.3365917021],
    [0.0000000589, 0.68025338272, 46.71424039951],
    [0.0000000618, 2.84467959186, 45.82046852221],
    [0.00000006347, 4.26496745804, 227.77000692311],
    [0.00000005285, 2.3860840294, 305.10235190919],
    [0.00000005176, 3.5626883467, 1052.51220067191],
    [0.00000005443, 1.65371041202, 471.9310244312],
    [0.00000005222, 0.59481167464, 124.5342203526],
    [0.00000005424, 4.52802960517, 91.70019060721],
    [0.00000005814, 1.36394366099, 340.52707456129],
    [0.00000005051, 4.26199970891, 515.70768857651],
    [0.00000004924, 4.31596399692, 404.2629728647],
    [0.00000005332, 2.58586292511, 83.1021708981],
    [0.00000005189, 5.10948461536, 61.01077037031],
    [0.00000005198, 4.05963240944, 486.1581184328],
    [0.00000004404, 3.47905723669, 171.8984151459],
    [0.00000005159, 4.18184292472, 383.0653442142],
    [0.00000004708, 5.52448195325, 110.45013870291],
    [0.00000004387, 3.15889315302, 209.6107596584],
    [0.00000004748, 5.94194450321, 98.6012892869],
    [0.00000004248, 1.30011269774, 230.3207533419],
    [0.00000005145, 1.65634530989, 74.0622082043],
    [0.00000004114, 5.01485142282, 2.20386307129],
    [0.00000005063, 2.9998808996, 75.98862389731],
    [0.0000000394, 5.91769063408, 55.38169607781],
    [0.00000004565, 0.8157348548, 223.20720634109],
    [0.00000003744, 0.15879098262, 43.5328466618],
    [0.0000000471, 0.25957456206, 186.4555775476],
    [0.0000000371, 1.73137944713, 94.6691360238],
    [0.00000003673, 2.68570227818, 80.65449034331],
    [0.00000003673, 5.13529281141, 69.3963417583],
    [0.00000003912, 3.10734552053, 183.85033042589],
    [0.00000003744, 4.08326458184, 155.53915477459],
    [0.00000004397, 6.10187638345, 902.19824401191],
    [0.0000000434, 3.3932412785, 131.16013238639],
    [0.000000036, 1.76146036337, 61.6920939265],
    [0.00000004967, 3.22509645861, 108.2173985967],
    [0.00000003476, 1.54136017705, 199.3158189199],
    [0.00000003658, 4.79206377689, 849.5080459724],
    [0.00000003523, 3.69437187603, 451.2210307477],
    [0.00000004488, 2.74277410385, 329.48137429739],
    [0.0000000398, 1.95932786654, 36.892380413],
    [0.00000003375, 5.91720302986, 415.3086731286],
    [0.0000000341, 1.87951443558, 4.2096006414],
    [0.00000003568, 6.07468170604, 446.06752933469],
    [0.00000004379, 1.89351588041, 145.35359649321],
    [0.00000003342, 5.45803791124, 295.4380584896],
    [0.0000000357, 6.04818504684, 50.6463936626],
    [0.00000003501, 2.1447682427, 460.2946233363],
    [0.00000003555, 0.03884741871, 397.14942586389],
    [0.00000003345, 0.09439746136, 544.1618765797],
    [0.00000003245, 4.46873398006, 428.32648106781],
    [0.00000003326, 2.20835247016, 354.75416856289],
    [0.00000003517, 2.35139644667, 204.9448932124],
    [0.00000003209, 2.99492291709, 237.4343003427],
    [0.00000003283, 1.6189339063, 32.48714639791],
    [0.00000003195, 6.27817675624, 1058.14127496441],
    [0.00000003291, 3.75210973869, 504.8050006645],
    [0.0000000321, 1.96285885557, 323.74923414091],
    [0.00000003632, 5.42847493228, 57.75994066341],
    [0.00000003617, 4.97056941864, 104.2303635794],
    [0.00000003794, 6.10025129416, 294.0566516453],
    [0.00000003164, 6.1608779776, 1819.3936486257],
    [0.00000003165, 3.65964152483, 216.72430665921],
    [0.00000003165, 0.51804887124, 216.2366716922],
    [0.00000003073, 5.18145172576, 41.8883152591],
    [0.00000003059, 5.3513299325, 905.64276230799],
    [0.00000003362, 5.69676404259, 85.58348134769],
    [0.00000003541, 3.69183627724, 956.53297345411],
    [0.00000003541, 5.63801834999, 191.45151239371],
    [0.0000000326, 3.54321329291, 227.557558602],
    [0.00000003047, 0.50860086202, 531.4192552864],
    [0.00000002983, 5.52362556155, 1589.3167127673],
    [0.00000003264, 5.67637422985, 336.5949212982],
    [0.00000003273, 3.54065334147, 60.3106870822],
    [0.00000003052, 1.58893349421, 411.3765198655],
    [0.00000002957, 3.38662804009, 207.913838629],
    [0.00000003082, 1.8672296918, 217.4750661846],
    [0.00000003147, 6.00497294061, 1169.83206889211],
    [0.00000003055, 5.34963236447, 381.3684231848],
    [0.00000003006, 3.41332999286, 290.8752579076],
    [0.00000002859, 0.87412339321, 276.79117625789],
    [0.00000002836, 6.05953478189, 88.35873817511],
    [0.0000000279, 2.75758754465, 62.0076081116],
    [0.00000003077, 1.58786085482, 109.0687318586],
    [0.00000002839, 1.72539635996, 942.3058794525],
    [0.00000002822, 3.28498999245, 128.7124518316],
    [0.00000003374, 2.87502037309, 736.1203310153],
    [0.00000002933, 2.23835900787, 306.58682461749],
    [0.00000002763, 5.42861535964, 1282.58913653029],
    [0.00000002895, 5.69820720276, 75.54668091261],
    [0.00000003459, 2.9310239611, 610.44852130189],
    [0.00000002886, 5.26577859528, 74.504151189],
    [0.00000002638, 3.75521976789, 198.0774244275],
    [0.00000002939, 5.73905357521, 179.9181771628],
    [0.00000002556, 1.29879665561, 430.02340209721],
    [0.00000002743, 3.82938065661, 141.9427080919],
    [0.00000002743, 3.82938065661, 141.4550731249],
    [0.00000002525, 4.2942314827, 219.171987214],
    [0.00000002654, 4.61997728072, 475.8631776943],
    [0.00000003424, 3.63115669579, 133.13224006171],
    [0.00000002448, 3.34099164118, 358.686321826],
    [0.00000002613, 3.5641607017, 1155.6049748905],
    [0.00000002428, 0.925343501, 714.92270236481],
    [0.00000003038, 0.02659248152, 145.387226388],
    [0.00000002558, 0.15484452507, 460.8853241673],
    [0.00000002602, 0.97639397784, 4.9096839295],
    [0.00000002602, 0.56141580457, 145.1411481721],
    [0.00000002603, 4.00253973196, 343.4623900831],
    [0.00000003095, 4.96470959339, 269.6776292571],
    [0.00000003095, 4.96470959339, 270.1652642241],
    [0.00000002576, 0.29697709235, 988.0255428431],
    [0.00000002387, 5.04233641349, 346.43133549971],
    [0.00000002643, 3.31153040747, 376.7025567388],
    [0.0000000229, 5.05227824278, 275.3067035496],
    [0.00000003061, 6.15240912134, 606.5163680388],
    [0.00000002264, 0.83314819323, 323.2615991739],
    [0.00000002638, 0.7917576598, 77.7191748215],
    [0.00000002246, 5.55551202459, 143.9027536797],
    [0.00000002334, 2.10308783101, 49.26498681829],
    [0.00000002334, 5.2446804846, 49.75262178531],
    [0.00000002696, 4.28534164626, 70.08436295889],
    [0.00000002327, 3.06369666366, 479.044571432],
    [0.00000002398, 2.55511918128, 183.486632131],
    [0.0000000204, 1.27681238416, 1968.9568457603],
    [0.0000000204, 1.27681238416, 1969.4444807273],
    [0.0000000196, 5.72020707325, 894.5970620441],
    [0.0000000196, 2.57861441966, 895.0846970111],
    [0.00000002286, 2.84819442391, 147.83490694279],
    [0.00000002536, 1.61730292038, 108.70503356371],
    [0.00000001832, 6.16198387079, 379.8839504765],
    [0.00000001977, 3.03212060303, 5.1728084879],
    [0.00000002397, 1.86738161703, 114.6429243969],
    [0.0000000245, 4.54363281495, 203.9816853659],
    [0.00000002258, 2.03199421502, 201.01273994931],
    [0.00000001767, 0.29075268819, 1514.047479233],
    [0.00000001767, 3.43234534178, 1514.5351142],
    [0.00000001978, 2.12934272436, 2.7251279331],
    [0.00000001763, 3.56951955484, 275.7943385166],
    [0.00000001714, 5.14400730282, 440.43845504219],
    [0.00000001714, 5.14400730282, 440.9260900092],
    [0.0000000171, 0.7410398453, 309.0345051723],
    [0.0000000171, 0.7410398453, 309.5221401393],
    [0.00000001917, 3.04967782266, 6.1817083167],
    [0.00000001613, 0.6879328097, 1044.1602591787],
    [0.00000001613, 0.6879328097, 1044.6478941457],
    [0.00000001722, 4.76110262034, 752.8981714357],
    [0.00000001722, 1.61950996675, 753.3858064027],
    [0.00000001656, 3.95388550783, 21.84758304429],
    [0.00000002072, 1.38441205546, 203.49405039889],
    [0.00000001528, 1.43661391386, 106.5179854398],
    [0.00000001528, 4.57820656745, 106.0303504728],
    [0.00000001802, 0.72583106929, 344.45922782439],
    [0.00000001802, 0.72583106929, 344.9468627914],
    [0.0000000161, 0.77273753295, 266.233110961],
    [0.00000001509, 2.15678911314, 924.28964453971],
    [0.00000001509, 2.15678911314, 923.8020095727],
    [0.00000001727, 2.66552748343, 625.1632502705],
    [0.00000001727, 5.80712013702, 624.6756153035],
    [0.00000001491, 4.05516091832, 422.9098550964],
    [0.00000001491, 0.91356826473, 422.42222012939],
    [0.00000001766, 5.63078579097, 224.1009782184],
    [0.00000002006, 3.3975598116, 144.8659615262],
    [0.0000000147, 5.47870687186, 284.39235822571],
    [0.0000000147, 2.33711421827, 283.9047232587],
    [0.00000001482, 0.38832219784, 17.91542978119],
    [0.00000001585, 3.24031630932, 710.99054910171],
    [0.00000001585, 0.09872365573, 710.5029141347],
    [0.00000001415, 0.78027163232, 13.9832765181],
    [0.00000001408, 1.2066363811, 254.6997757301],
    [0.00000001408, 4.34822903469, 255.1874106971],
    [0.00000001517, 2.6866055342, 976.9798425792],
    [0.00000001517, 2.6866055342, 976.4922076122],
];

const X3: &[Term] = &[
    [0.00000937647, 1.0088898407, 149.8070146181],
    [0.00000967548, 1.42552804346, 0.2438174835],
    [0.00000892089, 0.79608202303, 75.0254160508],
    [0.0000068466, 2.90453472816, 71.09326278771],
    [0.00000623727, 4.86286247873, 78.9575693139],
    [0.00000525597, 3.81206896615, 76.50988875911],
    [0.00000507791, 4.64109877567, 63.9797157869],
    [0.00000496551, 3.13919316435, 86.07111631471],
    [0.00000445874, 4.99904086064, 71.8440223131],
    [0.00000424392, 2.80391306791, 78.2068097885],
    [0.00000366041, 2.07755748247, 11.2895177474],
    [0.00000313023, 4.23932450493, 73.5409433425],
    [0.0000024903, 2.48148146374, 4.1759707466],
    [0.0000020915, 1.40893371766, 74.53778108379],
    [0.00000127465, 5.54018220786, 138.76131435421],
    [0.00000120647, 5.46876561078, 18.40306474821],
    [0.00000121784, 5.29001670826, 145.874861355],
    [0.00000078251, 3.48103273393, 224.5886131854],
    [0.00000084577, 0.33560464127, 2.9375762542],
    [0.00000050491, 2.35623662812, 131.6477673534],
    [0.00000045951, 6.2454019681, 151.2914873264],
    [0.00000046649, 0.5543591104, 56.8661687861],
    [0.00000048261, 2.93721017694, 22.3352180113],
    [0.00000034791, 1.00162978861, 93.1846633155],
    [0.00000029328, 1.75294089893, 220.6564599223],
    [0.00000030594, 5.68097375758, 160.852714882],
    [0.00000025988, 1.11718356254, 153.73916788121],
    [0.00000020587, 3.04578219289, 206.42936592071],
    [0.00000018718, 3.43630968031, 82.13896305161],
    [0.00000018634, 4.35949046286, 67.91186905],
    [0.00000016697, 2.01487108353, 87.555589023],
    [0.00000020883, 0.13997936753, 84.5866436064],
    [0.00000020072, 1.42313946401, 65.46418849521],
    [0.00000015729, 5.83349115204, 522.8212355773],
    [0.00000015573, 4.75214345059, 537.0483295789],
    [0.00000019429, 4.90609476184, 127.71561409031],
    [0.00000014513, 1.55811447849, 52.446380556],
    [0.00000014273, 3.15874513195, 52.934015523],
    [0.00000017225, 1.23506274281, 146.6256208804],
    [0.00000014135, 2.83531205367, 77.9943614674],
    [0.00000013035, 1.86446595495, 72.05647063421],
    [0.00000014349, 5.92118700781, 148.32254190981],
    [0.00000009002, 4.74037798245, 97.11681657861],
    [0.00000008798, 4.52661827695, 56.3785338191],
    [0.00000008208, 5.82435206434, 62.4952430786],
    [0.00000007603, 1.13885911665, 152.9884083558],
    [0.0000000714, 6.250245596, 194.89603068979],
    [0.00000006892, 1.11490592145, 80.65449034331],
    [0.00000006892, 0.42290386096, 69.3963417583],
    [0.00000006511, 3.55251442874, 45.3328335552],
    [0.00000006477, 5.17331047084, 209.12312469139],
    [0.00000005804, 3.28871244212, 70.6056278207],
    [0.00000005326, 2.66683839862, 127.22797912329],
    [0.00000005029, 4.10585397027, 149.3193796511],
    [0.00000005009, 5.03201863198, 297.9888049084],
    [0.00000005452, 1.62029053066, 72.577735496],
    [0.00000006294, 6.09382218854, 10.8018827804],
    [0.00000005251, 3.00689879881, 77.4730966056],
    [0.00000004684, 3.184109022, 202.4972126576],
    [0.00000004291, 2.72886332432, 134.3415261241],
    [0.00000005421, 4.86504346481, 120.1144321225],
    [0.00000004058, 3.84771327094, 312.21589891],
    [0.00000003926, 0.20635932899, 59.55992755679],
    [0.00000004419, 0.79082946257, 69.6087900794],
    [0.0000000425, 3.81801389997, 80.44204202221],
    [0.00000004556, 1.09930492481, 29.44876501211],
    [0.00000003592, 3.12402973242, 199.3158189199],
    [0.00000003523, 3.8429249217, 636.2089505344],
    [0.00000003428, 4.80416729358, 621.98185653281],
    [0.00000003942, 3.83644807496, 3.21276290011],
    [0.0000000362, 3.64168879156, 3.42521122121],
    [0.00000003227, 2.36250033807, 3.6883357796],
    [0.00000003564, 2.97403981009, 70.35954960481],
    [0.00000003564, 1.70536262591, 79.6912824968],
    [0.00000003552, 0.48986762414, 426.8420083595],
    [0.00000003245, 4.05425635175, 611.8299281462],
    [0.0000000309, 2.274446743, 486.1581184328],
    [0.00000003149, 3.23221666282, 471.9310244312],
    [0.00000002864, 4.40034684781, 272.85902299479],
    [0.00000003756, 0.28897263531, 258.6319289932],
    [0.00000002808, 6.27609619511, 647.25465079831],
    [0.0000000264, 2.22066140796, 288.32451148881],
    [0.00000002544, 0.39091843469, 76.0222537921],
    [0.0000000267, 2.78782481368, 375.9517972134],
    [0.00000002998, 0.71551145066, 76.72233708021],
    [0.00000002998, 3.96389098534, 73.3284950214],
    [0.00000003125, 1.93972182076, 408.68276109481],
    [0.0000000233, 0.87729499827, 433.9555553603],
    [0.00000002645, 0.46205095531, 120.6020670895],
    [0.00000002219, 3.00549424798, 390.9296507404],
    [0.00000002517, 1.04902375688, 213.5429129215],
    [0.00000002074, 3.43164566806, 63.49208081989],
    [0.00000001894, 1.69172880285, 213.0552779545],
    [0.00000001849, 2.61330239059, 134.8291610911],
    [0.00000001838, 5.57764928554, 73.0533083755],
    [0.00000002214, 0.39891007096, 1.7282901918],
    [0.00000001644, 4.6653469439, 384.3037387066],
    [0.00000001644, 4.6653469439, 383.81610373959],
    [0.00000001553, 5.52374457077, 462.2667310116],
    [0.00000001553, 2.38215191718, 461.77909604459],
    [0.00000001419, 5.77169479025, 422.9098550964],
    [0.00000001419, 2.63010213666, 422.42222012939],
    [0.00000001411, 4.93713727855, 9.8050450391],
    [0.00000001443, 5.13235693386, 195.38366565681],
    [0.00000001402, 4.46431718602, 984.8441491054],
    [0.00000001402, 4.46431718602, 984.35651413839],
];

const X4: &[Term] = &[
    [0.00002203535, 3.7880031677, 75.0254160508],
    [0.0000012837, 4.00299274369, 0.2438174835],
    [0.00000072353, 5.87048427972, 149.8070146181],
    [0.00000030194, 0.37339777366, 63.9797157869],
    [0.00000030655, 1.0732065932, 86.07111631471],
    [0.00000016471, 3.60870796009, 18.40306474821],
    [0.00000016067, 2.53660745454, 76.50988875911],
    [0.00000016064, 1.88841261109, 73.5409433425],
    [0.00000010244, 3.15336566765, 74.53778108379],
    [0.00000006697, 4.11208833064, 131.6477673534],
    [0.00000007164, 3.44355611982, 1.7282901918],
    [0.00000006834, 2.38206416682, 56.8661687861],
    [0.00000004835, 5.58205045904, 11.2895177474],
    [0.00000005294, 5.39389664747, 93.1846633155],
    [0.00000003031, 0.0971027904, 71.09326278771],
    [0.00000002817, 4.57947190523, 78.9575693139],
    [0.00000002343, 0.07235611013, 220.6564599223],
    [0.00000002389, 0.7325761017, 283.9047232587],
    [0.00000002294, 3.03614566251, 365.6568564749],
    [0.00000002237, 4.80048540778, 206.42936592071],
    [0.00000001842, 5.42341768633, 138.76131435421],
    [0.00000002009, 2.15212981432, 224.5886131854],
    [0.00000001813, 0.96578276317, 148.32254190981],
];

const X5: &[Term] = &[
    [0.00000016766, 3.8866625814, 75.0254160508],
    [0.00000001843, 6.11677355708, 0.2438174835],
];

const Y0: &[Term] = &[
    [19.16944479396, 3.91049731307, 75.0254160508],
    [1.33267708718, 4.59010345878, 0.2438174835],
    [0.44396480992, 0.08885999374, 149.8070146181],
    [0.14712072726, 1.85369914992, 73.5409433425],
    [0.14127113794, 2.82489686708, 76.50988875911],
    [0.06225592204, 3.56962085379, 1.7282901918],
    [0.01542809804, 2.55041372379, 224.5886131854],
    [0.01443286598, 1.08021023229, 148.32254190981],
    [0.00941982751, 0.09031933919, 11.2895177474],
    [0.00657433967, 5.28832386804, 151.2914873264],
    [0.00637676334, 2.64460991486, 63.9797157869],
    [0.00621475723, 1.48799213488, 77.9943614674],
    [0.00563553759, 3.23634730851, 72.05647063421],
    [0.00547585874, 2.06043009525, 86.07111631471],
    [0.00433273658, 0.94921595274, 74.53778108379],
    [0.00458904544, 2.33727121263, 3.21276290011],
    [0.00496011875, 5.31196024834, 529.9347825781],
    [0.00385773622, 4.61855610406, 138.76131435421],
    [0.00268150781, 5.68104913033, 213.5429129215],
    [0.00215803817, 3.7379939095, 38.3768531213],
    [0.00144768728, 0.74847059103, 71.09326278771],
    [0.00135315426, 3.93976545519, 78.9575693139],
    [0.00119632236, 2.53058847664, 39.86132582961],
    [0.0012498711, 0.9434580718, 111.67397898031],
    [0.00111232552, 3.55168186769, 223.1041404771],
    [0.00104563861, 2.33402510023, 146.8380692015],
    [0.00109354782, 6.02395126243, 34.9202727377],
    [0.00063579167, 5.01205049565, 299.37021175271],
    [0.00076241847, 4.10733816861, 63.49208081989],
    [0.00053591167, 2.369658023, 4.1759707466],
    [0.000644205, 2.15769822929, 110.189506272],
    [0.0004456657, 2.03132488718, 73.0533083755],
    [0.00039200127, 1.11801397388, 4.6972356084],
    [0.00033660673, 0.94726438208, 65.46418849521],
    [0.0003433803, 1.46699099857, 226.07308589371],
    [0.00034546984, 0.27616739379, 79.47883417571],
    [0.00037552003, 5.71118714669, 202.0095776906],
    [0.00029546886, 4.42962464119, 70.5719979259],
    [0.00025683031, 3.73653421618, 9.8050450391],
    [0.00023447563, 2.52695137802, 145.874861355],
    [0.00022948537, 3.94425470497, 84.5866436064],
    [0.00031820127, 3.96864561052, 152.77596003471],
    [0.00022832266, 3.86462602619, 127.22797912329],
    [0.00028378722, 4.44710211392, 184.97110483931],
    [0.00026655018, 4.53946351355, 160.852714882],
    [0.00019671485, 3.96350915722, 74.91354146621],
    [0.00019648859, 0.71579539008, 75.1372906354],
    [0.00019896586, 5.28901013119, 12.77399045571],
    [0.00024486297, 3.56492038672, 1.24065522479],
    [0.00016842912, 2.0499090222, 52.446380556],
    [0.00022087252, 6.16990066193, 71.5688356672],
    [0.00020068191, 2.90302034853, 22.3352180113],
    [0.00019913902, 6.11096260597, 113.15845168861],
    [0.00018351147, 0.98731771489, 33.43580002939],
    [0.00016887001, 4.92522785944, 36.892380413],
    [0.00015173078, 1.31324926487, 41.3457985379],
    [0.0001124241, 4.54512860104, 71.8440223131],
    [0.00013948685, 4.70470503634, 221.61966776881],
    [0.00010809036, 0.12879555337, 78.2068097885],
    [0.0001359181, 0.98320955083, 87.555589023],
    [0.0001199731, 5.66121692499, 1059.6257476727],
    [0.00012401284, 4.64879549493, 72.577735496],
    [0.00011534891, 0.20176113714, 77.4730966056],
    [0.00009194297, 3.5660491616, 145.35359649321],
    [0.00008737279, 3.39876002185, 186.4555775476],
    [0.00009136217, 1.79342336217, 127.71561409031],
    [0.00009219832, 0.08407294164, 108.2173985967],
    [0.00007422726, 3.38880260286, 108.70503356371],
    [0.00007094598, 6.01618568387, 297.8857390444],
    [0.00006261877, 0.14282449694, 153.73916788121],
    [0.0000749065, 4.82606551806, 426.8420083595],
    [0.00007827357, 1.11765019484, 340.52707456129],
    [0.00006073898, 3.36888016003, 149.3193796511],
    [0.00005510674, 1.73980185942, 140.2457870625],
    [0.00006397195, 3.71974404814, 62.4952430786],
    [0.00005370666, 2.55420803164, 75.54668091261],
    [0.00005352595, 2.12177919322, 74.504151189],
    [0.00004493418, 5.82649121556, 66.9486612035],
    [0.00004261392, 5.53250398932, 265.745475994],
    [0.00005026106, 3.11745853421, 18.40306474821],
    [0.00004641163, 4.97358578602, 36.404745446],
    [0.00004448201, 5.69436641871, 183.486632131],
    [0.0000378154, 2.58174473007, 10.8018827804],
    [0.00004750672, 3.38680531662, 74.0622082043],
    [0.00004350588, 1.16130513588, 70.08436295889],
    [0.00004446999, 5.00656772452, 114.6429243969],
    [0.00003313232, 5.23356115546, 83.1021708981],
    [0.000045125, 1.31375599245, 75.98862389731],
    [0.00003556191, 6.1888649384, 6.1817083167],
    [0.00003266875, 5.23064845262, 220.6564599223],
    [0.00003059638, 6.23776415109, 52.934015523],
    [0.00003576768, 5.83381085162, 137.2768416459],
    [0.00002881563, 1.1904769044, 374.15181032],
    [0.00003196605, 6.1266859774, 76.0222537921],
    [0.00002944255, 3.5270948318, 7.3573644843],
    [0.00003729115, 0.25277739547, 144.8659615262],
    [0.00002521158, 0.28068609662, 202.4972126576],
    [0.0000259596, 4.93669910815, 97.11681657861],
    [0.00002560051, 2.8717041048, 80.44204202221],
    [0.00002653876, 1.61857820268, 305.10235190919],
    [0.00002508094, 2.2137690709, 31.9513273211],
    [0.00001961925, 4.8062643956, 20.850745303],
    [0.00002229736, 5.34787936891, 80.963306884],
    [0.00002202407, 0.49391085353, 2.9375762542],
    [0.00001935845, 0.49503923254, 75.0736001606],
    [0.00001935843, 4.18436372115, 74.97723194101],
    [0.00002138399, 2.63817800787, 74.76478361991],
    [0.00002128668, 2.0411790004, 75.2860484817],
    [0.00002214188, 0.61512393401, 259.7527034066],
    [0.00001890291, 3.928570182, 300.854684461],
    [0.00002249087, 4.91851562646, 138.2736793872],
    [0.00001926813, 6.00497183129, 159.36824217371],
    [0.00001799526, 4.16205107006, 74.8653573564],
    [0.00001794407, 0.51735541616, 75.1854747452],
    [0.00001908592, 5.63004607587, 69.0875252176],
    [0.00002175205, 1.57021660383, 131.6477673534],
    [0.00001898923, 2.65284957017, 206.42936592071],
    [0.00001654495, 2.32498724537, 277.2788112249],
    [0.00001785247, 5.91797544176, 56.8661687861],
    [0.00001617939, 0.41918980719, 2.69149803831],
    [0.00001860708, 0.10451537367, 42.83027124621],
    [0.00002180164, 2.8063651573, 479.044571432],
    [0.00001576477, 3.66272707282, 190.9638774267],
    [0.00001904361, 4.26492017662, 15.2216710105],
    [0.00002054711, 5.17344254449, 834.7933170038],
    [0.00001834581, 1.34736149542, 106.73292588839],
    [0.00001890085, 2.75024642804, 154.260432743],
    [0.00001795901, 0.1631435388, 227.557558602],
    [0.00001670623, 5.91846317829, 220.1351950605],
    [0.00001347353, 3.89460250777, 288.32451148881],
    [0.00001425992, 5.10014924331, 93.1846633155],
    [0.00001265397, 0.92611311536, 404.2629728647],
    [0.00001581901, 4.15166691641, 39.6006933987],
    [0.00001269733, 1.09468107953, 142.6934676173],
    [0.00001653676, 0.42042255686, 181.5145244557],
    [0.00001437856, 5.44092263677, 522.8212355773],
    [0.00001407281, 2.04674828978, 537.0483295789],
    [0.00001359462, 5.38881787204, 62.0076081116],
    [0.00001417609, 0.72618172617, 235.6343134493],
    [0.0000112229, 4.8535157106, 60.04756252381],
    [0.00001037982, 1.19097992567, 5.6604434549],
    [0.00001164766, 0.51146987374, 82.13896305161],
    [0.00001009353, 0.453079819, 74.2746565254],
    [0.00001216357, 1.84744066187, 212.05844021321],
    [0.00000996588, 4.22632308814, 75.77617557621],
    [0.00000983856, 6.27680570981, 129.2000867986],
    [0.00001223267, 2.27299989031, 187.9400502559],
    [0.00001335581, 3.74795268087, 379.8839504765],
    [0.00001203897, 4.02952218586, 67.91186905],
    [0.0000114684, 0.85085247156, 296.4012663361],
    [0.00001000425, 4.82141247296, 8.32057233081],
    [0.00001191037, 4.01680230124, 50.6463936626],
    [0.00001128718, 5.51338814083, 230.3207533419],
    [0.00000930244, 5.33330412293, 276.79117625789],
    [0.00000857081, 4.49010094287, 68.4331339118],
    [0.00000912408, 0.12283731726, 149.6951400335],
    [0.00001170925, 0.4577953277, 110.45013870291],
    [0.00000857595, 6.21726257263, 90.0032695778],
    [0.00000989091, 1.04565979808, 35.6685401356],
    [0.00001054223, 3.96633755369, 14.258463164],
    [0.00000959939, 4.47203405039, 147.83490694279],
    [0.00000957455, 6.25324374775, 64.97655352819],
    [0.00000909789, 3.15839894712, 149.91888920271],
    [0.00000943313, 0.06263523023, 53.93085326429],
    [0.00000891565, 4.5954437626, 107.2205608554],
    [0.0000077548, 3.57147759051, 70.6056278207],
    [0.00000861039, 4.78256260255, 143.8691237849],
    [0.00000851667, 0.50386900265, 134.8291610911],
    [0.0000084229, 4.31374571284, 3.6883357796],
    [0.00000893222, 1.81802815173, 23.81969071961],
    [0.00000790626, 2.40048938853, 7.83293736379],
    [0.00000683506, 0.23627850921, 81.61769818981],
    [0.00000789879, 3.10451486371, 35.40790770471],
    [0.00000669882, 3.13601045204, 50.9619078477],
    [0.00000853775, 0.49301638444, 200.52510498229],
    [0.00000698863, 4.93731616945, 125.743506415],
    [0.00000814817, 1.52199016837, 143.38148881789],
    [0.00000862909, 3.46019641204, 162.3371875903],
    [0.00000845548, 1.4936630589, 203.49405039889],
    [0.00000797191, 0.65007259191, 99.40443843901],
    [0.00000766426, 0.89351379369, 68.80564092731],
    [0.00000609673, 0.23918047727, 24.1352049047],
    [0.0000065455, 5.45801088086, 109.701871305],
    [0.00000783834, 0.5887009784, 218.1630873852],
    [0.00000744901, 2.79731067673, 760.01171843649],
    [0.00000643611, 5.98397644447, 89.0400617313],
    [0.00000525538, 1.48456394611, 128.7124518316],
    [0.00000703451, 3.78477189218, 81.2451911743],
    [0.00000590282, 1.77381181137, 69.6087900794],
    [0.00000528305, 0.71004370185, 146.6256208804],
    [0.00000621414, 2.39650007607, 68.5998902506],
    [0.00000677104, 0.95388610928, 56.3785338191],
    [0.00000697582, 4.50208217501, 617.5620683027],
    [0.00000597125, 0.63573583143, 182.00215942271],
    [0.0000068978, 2.4602760025, 2.7251279331],
    [0.00000578345, 0.91036470086, 28.81562556571],
    [0.00000587454, 2.33732577632, 152.2546951729],
    [0.00000670562, 4.63198986719, 5.97595764],
    [0.00000596736, 1.809274428, 116.18227885939],
    [0.00000480108, 5.71326814363, 415.3086731286],
    [0.00000505417, 0.96244787568, 157.8837694654],
    [0.00000551335, 5.85642311971, 261.2371761149],
    [0.00000584839, 4.61840602682, 258.26823069831],
    [0.00000571647, 2.69246515899, 194.89603068979],
    [0.00000473414, 2.89922727404, 134.3415261241],
    [0.00000551129, 0.91615593626, 59.55992755679],
    [0.00000518895, 0.73540791389, 352.06040979221],
    [0.00000444205, 5.32877320177, 329.48137429739],
    [0.00000531507, 4.45049996181, 54.41848823131],
    [0.00000449312, 2.60522543313, 542.78046973539],
    [0.00000486453, 5.04367743163, 73.6528179271],
    [0.00000437062, 6.0117230416, 1589.3167127673],
    [0.00000488485, 3.97669319472, 9.3174100721],
    [0.00000431252, 6.26915854927, 41.4006802921],
    [0.00000435419, 2.19426156558, 372.66733761171],
    [0.00000484495, 5.60519908806, 209.12312469139],
    [0.00000418899, 0.40333301614, 95.6323438703],
    [0.00000514102, 3.8374141805, 116.12739710521],
    [0.00000388869, 4.3955254469, 152.9884083558],
    [0.00000361158, 0.85200523076, 120.1144321225],
    [0.0000037187, 4.1091418833, 144.39038864671],
    [0.00000339152, 5.35894945718, 46.4536079686],
    [0.00000373018, 1.90146663534, 73.4290687579],
    [0.0000038293, 3.642150837, 114.38229196601],
    [0.00000426834, 0.89896226407, 141.7302597708],
    [0.00000396238, 0.74278278155, 98.91680347199],
    [0.00000396936, 1.69553808184, 180.03005174739],
    [0.00000318113, 4.93841214947, 33.3809182752],
    [0.00000325989, 2.61881558482, 228.5207664485],
    [0.00000435822, 3.7448243159, 37.88921815429],
    [0.00000392309, 3.12268597468, 155.53915477459],
    [0.00000353063, 4.66591593809, 215.0273856298],
    [0.00000410664, 2.63874768833, 490.5779066629],
    [0.00000325464, 4.97938687953, 7.66618102501],
    [0.0000029989, 5.32358213894, 45.3328335552],
    [0.00000319736, 3.43237988274, 30.4668546128],
    [0.00000278968, 3.94608550399, 6.3484646555],
    [0.0000031288, 1.42604949071, 419.72846135871],
    [0.00000386565, 0.75656271428, 254.8116503147],
    [0.00000311788, 0.80567112359, 147.3593340633],
    [0.00000300229, 5.03792883993, 0.719390363],
    [0.00000337396, 3.60674120968, 150.7702224646],
    [0.00000253789, 6.19652620996, 19.36627259471],
    [0.00000308097, 4.0640000276, 640.1411037975],
    [0.00000252403, 5.01154326423, 150.3282794799],
    [0.00000238679, 0.99851487185, 553.82616999929],
    [0.00000266427, 2.58806015071, 105.2484531801],
    [0.00000278375, 5.88688068426, 29.44876501211],
    [0.00000306043, 0.18265767681, 6283.3196674749],
    [0.00000265739, 1.06481607166, 28.0673581678],
    [0.00000280569, 2.87788043615, 126.231141382],
    [0.00000300771, 0.42899364062, 984.8441491054],
    [0.00000229063, 4.33041573821, 33.9234349964],
    [0.00000226799, 3.78600389427, 121.2352065359],
    [0.00000238148, 5.87500222549, 2.20386307129],
    [0.0000019842, 3.1903890173, 69.91760662011],
    [0.00000220174, 5.18139057822, 44.31474395451],
    [0.00000220857, 3.44201572334, 47.9380806769],
    [0.00000211834, 3.3423585921, 0.7650823453],
    [0.00000257979, 0.30426624589, 1289.7026835311],
    [0.0000024051, 6.20484819466, 756.07956517339],
    [0.0000021387, 1.08601616914, 316.6356871401],
    [0.00000231462, 2.77988039912, 46.71424039951],
    [0.00000232197, 2.17648415571, 339.042601853],
    [0.00000214419, 1.18021908307, 189.42452296421],
    [0.00000219049, 5.43837709719, 213.0552779545],
    [0.00000241635, 3.54595332721, 102.84895673509],
    [0.00000198526, 5.03106436317, 61.01077037031],
    [0.00000237145, 3.1454145209, 342.0115472696],
    [0.00000173496, 6.02474649172, 116.6699138264],
    [0.00000194828, 0.84925657122, 218.6507223522],
    [0.00000175785, 1.5347327573, 57.4993082325],
    [0.00000167277, 5.61665487201, 30.300098274],
    [0.000001734, 4.28804409833, 681.2979666061],
    [0.00000214483, 0.9105198139, 135.7923689376],
    [0.0000020511, 1.86858550999, 216.67861467689],
    [0.00000168458, 1.51585792778, 80.1332254815],
    [0.00000164308, 0.70973234637, 467.9988711681],
    [0.00000203489, 5.8293737955, 148.84380677161],
    [0.00000177178, 5.36314195972, 103.597224133],
    [0.00000165274, 5.36941056367, 155.2236405895],
    [0.00000185802, 3.99560320824, 74.13164417351],
    [0.00000185802, 0.68379922776, 75.9191879281],
    [0.00000187376, 4.62809176973, 149.28574975631],
    [0.00000153285, 3.45417848657, 17.28229033479],
    [0.00000161572, 0.32247161825, 264.2610032857],
    [0.0000018582, 5.76008718824, 76.3980141745],
    [0.00000181668, 3.10973418373, 455.1531840108],
    [0.00000175514, 4.41099766534, 333.4135275605],
    [0.00000157908, 4.13654987265, 82.4477795923],
    [0.00000169475, 5.91337395999, 454.6655490438],
    [0.00000196145, 0.92388864115, 291.4602132442],
    [0.0000017797, 0.39528529238, 685.2301198692],
    [0.00000137738, 3.65235776206, 448.9334088873],
    [0.0000015262, 2.03319901912, 234.149840741],
    [0.00000137407, 0.4961104991, 16.9185920399],
    [0.00000150365, 4.65428057213, 294.91679362781],
    [0.00000131039, 2.42507712732, 156.3992967571],
    [0.00000180038, 2.01273291483, 103.3365917021],
    [0.00000129725, 4.56525647923, 76.72233708021],
    [0.00000142122, 5.78256645364, 224.1009782184],
    [0.00000128982, 4.86634473406, 130.6845595069],
    [0.00000146399, 3.06416499534, 334.5343019739],
    [0.00000177104, 1.60811125139, 10213.5293636945],
    [0.00000129816, 3.14582203581, 92.5515238691],
    [0.00000171451, 3.01469327848, 156.02678974161],
    [0.00000155457, 1.02026020385, 347.6406215621],
    [0.00000134222, 0.55759952973, 67.60305250931],
    [0.00000167287, 0.73206039815, 80.7575562073],
    [0.00000126618, 2.97362091056, 55.9029609396],
    [0.00000127892, 5.91651149188, 61.6920939265],
    [0.00000146027, 4.63620735731, 174.1860370063],
    [0.00000143517, 4.72419244572, 23.87457247379],
    [0.00000139674, 4.51014304795, 286.8400387805],
    [0.00000114667, 5.20627341431, 13.0895046408],
    [0.00000114401, 2.63083933234, 692.34366686999],
    [0.00000139103, 5.06218842316, 120.6020670895],
    [0.00000124306, 4.39000727764, 111.18634401329],
    [0.00000121491, 4.89143182138, 79.6912824968],
    [0.0000010672, 5.03982163712, 67.1611095246],
    [0.00000124445, 2.77221022491, 141.8970161096],
    [0.00000150445, 4.77055522751, 77.5067265004],
    [0.00000128748, 3.45272600965, 254.6997757301],
    [0.00000135145, 1.15443620224, 171.8984151459],
    [0.00000125741, 3.85934191891, 98.6012892869],
    [0.0000010686, 0.10501468915, 375.6362830283],
    [0.00000128791, 1.5382012208, 155.7449054513],
    [0.00000104092, 0.09658958912, 54.5785469257],
    [0.00000142443, 4.61127299852, 203.9816853659],
    [0.00000109153, 1.74773683236, 1.20702533],
    [0.00000111788, 4.78068421543, 272.85902299479],
    [0.00000125849, 2.31032327443, 182.998997164],
    [0.00000128119, 5.96640498766, 256.78375799],
    [0.00000101034, 0.35709921098, 363.1061100561],
    [0.00000104496, 1.27067787791, 131.16013238639],
    [0.00000135112, 4.32885525625, 629.0954035336],
    [0.0000009607, 2.53083839499, 258.6319289932],
    [0.00000102131, 5.0386077563, 88.35873817511],
    [0.00000101524, 1.01685797883, 51.44954281471],
    [0.00000114745, 3.99231633115, 633.0275567967],
    [0.00000105009, 5.80120897394, 105.7360881471],
    [0.00000106158, 2.64028517894, 302.3391571693],
    [0.00000114559, 1.22538898026, 604.7163811454],
    [0.00000097687, 1.5145855866, 77.0311536209],
    [0.00000092981, 1.80318597364, 94.147871162],
    [0.00000092956, 1.47669166228, 43.5328466618],
    [0.0000009912, 5.09958883998, 149.5463821872],
    [0.00000116555, 5.44320124755, 85.58348134769],
    [0.00000089934, 2.95642515081, 149.85519872791],
    [0.00000089708, 3.1323606485, 217.4750661846],
    [0.00000111015, 2.0468923149, 253.32717760639],
    [0.00000092676, 2.85459016512, 267.22994870229],
    [0.00000111165, 2.03014798464, 19.8875374565],
    [0.00000089583, 1.04552994794, 295.4380584896],
    [0.00000089934, 0.36256511993, 149.7588305083],
    [0.00000089829, 1.60334868993, 529.44714761109],
    [0.00000104822, 4.71885222665, 433.9555553603],
    [0.00000097705, 4.61026387361, 1052.51220067191],
    [0.00000107796, 5.92808397447, 100.6282787164],
    [0.00000087921, 4.32670648553, 74.3922766044],
    [0.00000087921, 0.35269595047, 75.65855549721],
    [0.00000086241, 4.5306330611, 76.6699474535],
    [0.0000011596, 4.20154334971, 1214.92108496379],
    [0.00000112324, 5.22657318772, 229.0420313103],
    [0.00000092049, 1.25111090139, 6.86972951729],
    [0.0000010686, 1.56893886591, 81.9265147305],
    [0.00000082022, 5.83269737454, 82.889722577],
    [0.0000008348, 2.97873123693, 149.9670733125],
    [0.00000081598, 0.00771145613, 146.3504342345],
    [0.00000091518, 2.26786409002, 150.8038523594],
    [0.0000007895, 5.23329492514, 4.8639919472],
    [0.0000010795, 4.72998464814, 1162.7185218913],
    [0.00000080076, 0.46711196257, 73.38088464811],
    [0.00000093643, 0.84579418099, 99.1438060081],
    [0.0000009912, 4.50258673794, 150.06764704901],
    [0.00000082453, 5.81189856956, 7.14491616321],
    [0.00000076677, 5.8393689715, 73.80157577341],
    [0.00000075891, 6.10092456248, 219.171987214],
    [0.00000074887, 5.67794366791, 6.8360996225],
    [0.00000102486, 3.12247878711, 210.5739675049],
    [0.00000100859, 2.53732811231, 219.6475600935],
    [0.0000008348, 0.34025903382, 149.6469559237],
    [0.0000008397, 3.2855118495, 371.1828649034],
    [0.00000077201, 0.02474873694, 26.2673712744],
    [0.00000073643, 4.58220709295, 95.47228517591],
    [0.00000102191, 1.09075434358, 328.1087761737],
    [0.00000080117, 5.98791220974, 142.3846510766],
    [0.00000080972, 3.62371604241, 67.1154175423],
    [0.00000071543, 4.72957453846, 189.47940471839],
    [0.00000082381, 4.20534144511, 58.3506414944],
    [0.00000090613, 1.46760950491, 17.0216579039],
    [0.00000082892, 1.64329175266, 175.40987728371],
    [0.00000069078, 5.39603237759, 119.7507338276],
    [0.00000077925, 4.56151662815, 191.45151239371],
    [0.00000078846, 4.72561034763, 262.72164882321],
    [0.00000087497, 1.63219490623, 894.5970620441],
    [0.00000070199, 5.9810533989, 819.8154634768],
    [0.00000068577, 4.99804003301, 15.7978176265],
    [0.00000076274, 1.851613625, 180.51768671441],
    [0.00000067854, 2.38798386084, 606.5163680388],
    [0.00000077388, 3.19411072289, 310.41591201661],
    [0.00000065829, 4.32001805221, 75.8285652029],
    [0.00000065829, 0.35938438379, 74.2222668987],
    [0.00000078426, 3.8414527845, 50.9070260935],
    [0.00000071406, 1.51626708317, 12.28635548869],
    [0.00000077423, 6.17877210501, 70.2901136356],
    [0.00000069368, 2.39711158006, 1066.7392946735],
    [0.00000080391, 3.12585627922, 16.7061437188],
    [0.00000085613, 3.02934752525, 173.9254045754],
    [0.00000072675, 2.57315009777, 44.48150029329],
    [0.00000084563, 5.09853843122, 55.4153259726],
    [0.00000062255, 5.03095032865, 209.6107596584],
    [0.00000084357, 5.06410076104, 331.56535655731],
    [0.00000070498, 2.80103845095, 76.62176334371],
    [0.00000079016, 3.86114745433, 477.5600987237],
    [0.00000082673, 4.81351709872, 480.52904414029],
    [0.00000082513, 1.59855523562, 192.448350135],
    [0.00000080452, 0.84754362206, 333.0498292656],
    [0.00000058904, 5.18941699981, 24.6228398717],
    [0.00000072407, 4.52650506832, 909.5749155711],
    [0.00000076612, 2.62396349451, 82.7296638826],
    [0.0000007551, 2.06744522079, 67.32116821901],
    [0.00000075555, 2.667448468, 15.7429358723],
    [0.00000070086, 1.28356301862, 167.9662618828],
    [0.00000077989, 1.70294491984, 70.35954960481],
    [0.00000066531, 2.86989915171, 61.5320352321],
    [0.00000064336, 2.95658893043, 178.5455790391],
    [0.00000056673, 3.19941121229, 106.5179854398],
    [0.0000007764, 1.4924892933, 71.4020793284],
    [0.00000062431, 3.15117993734, 25.3590451821],
    [0.00000066444, 6.24350199754, 125.42799222991],
    [0.00000056738, 1.26277611682, 67.424234083],
    [0.00000055917, 2.89741852417, 949.4194264533],
    [0.00000076032, 0.059438713, 60.52313540329],
    [0.00000059, 1.97279336373, 402.77850015639],
    [0.00000073138, 0.69242086169, 26.84351789039],
    [0.00000054636, 6.18572230294, 72.10465474401],
    [0.0000006461, 6.10083958494, 471.9310244312],
    [0.00000053942, 6.14677939181, 117.6667515677],
    [0.00000054371, 2.13625507265, 341.01470952831],
    [0.00000054836, 4.43105022688, 3.42521122121],
    [0.00000072732, 3.18629698674, 78.6487527732],
    [0.00000069223, 4.4357826238, 8.10812400971],
    [0.00000070778, 2.29608168481, 237.4343003427],
    [0.00000053991, 3.01146704045, 149.05625509271],
    [0.00000051866, 4.77686544357, 77.9461773576],
    [0.0000006075, 4.76881715073, 79.76071846601],
    [0.00000069434, 2.72131865841, 256.296123023],
    [0.00000052587, 4.28485895391, 830.8611637407],
    [0.00000056127, 2.54058660944, 65.6242471896],
    [0.00000053925, 0.48058717157, 13.73719830221],
    [0.00000050216, 3.59581882696, 195.38366565681],
    [0.00000057142, 0.50054596978, 31.8964455669],
    [0.00000055249, 5.9728995126, 75.3979230663],
    [0.00000055249, 4.98968823058, 74.6529090353],
    [0.00000049301, 5.39744243512, 76.2492563282],
    [0.00000060539, 2.19999973905, 289.97574053589],
    [0.00000064921, 1.85315970147, 846.3266522347],
    [0.00000059034, 2.15240427373, 27.3311528574],
    [0.00000051079, 6.13730250517, 0.3556920681],
    [0.00000051079, 3.2874754556, 0.1319428989],
    [0.00000056906, 0.0276482063, 143.21473247911],
    [0.00000051926, 3.14825419321, 185.2317372702],
    [0.00000048626, 1.04414880109, 49.1619209543],
    [0.00000051388, 4.38845040975, 42.88515300039],
    [0.00000064661, 4.35150637725, 910.0625505381],
    [0.00000048885, 0.7124716194, 91.70019060721],
    [0.0000005013, 1.11056344933, 102.11275142471],
    [0.0000004759, 2.58646137213, 224.4767386008],
    [0.00000057461, 2.71055250906, 303.6178792009],
    [0.00000050603, 0.01398135868, 35.18090516859],
    [0.00000048745, 0.99720060201, 201.01273994931],
    [0.00000058382, 2.71650750224, 486.1581184328],
    [0.00000049531, 0.36947250466, 44.96913526031],
    [0.00000054462, 5.91602724751, 237.11878615761],
    [0.00000054466, 2.50120140695, 75.6798073566],
    [0.00000054466, 2.17820102905, 74.37102474501],
    [0.00000060438, 0.32621216428, 266.233110961],
    [0.00000048443, 5.57062182834, 178.11819026941],
    [0.00000055698, 0.52867804605, 278.76328393321],
    [0.00000044294, 3.52677749838, 57.75994066341],
    [0.00000048861, 5.2084721294, 122.71967924421],
    [0.00000046778, 2.82048605921, 14.47091148511],
    [0.00000052405, 0.06300374474, 58.9837809408],
    [0.00000047669, 2.13908929429, 84.42658491201],
    [0.00000059409, 2.64417368509, 117.6118698135],
    [0.00000042464, 0.34761416357, 150.5577741435],
    [0.00000042527, 3.59846310307, 69.3963417583],
    [0.00000044136, 2.47960023448, 554.31380496631],
    [0.00000056899, 0.53819926759, 25.3041634279],
    [0.0000005344, 6.17081078665, 275.3067035496],
    [0.00000048371, 0.35760092436, 56.01483552421],
    [0.00000051224, 5.62752727167, 1364.4842820984],
    [0.00000044203, 4.50403311651, 70.8326303568],
    [0.00000041205, 6.18207911178, 124.2590337067],
    [0.00000041202, 4.39907320318, 49.47743513939],
    [0.00000053218, 3.5470002495, 7.4604303483],
    [0.00000039879, 4.96873405562, 48.51422729289],
    [0.00000039626, 1.62185831078, 72.73779419041],
    [0.00000042269, 3.27019607433, 232.66536803271],
    [0.00000039724, 2.20111532844, 88.5187968695],
    [0.00000054178, 1.25790703261, 364.7573391032],
    [0.00000047398, 5.34395839525, 74.1740827889],
    [0.00000047398, 5.61862934792, 75.87674931271],
    [0.00000045255, 5.10853887295, 393.2172726008],
    [0.00000041021, 0.17536932736, 79.2182017448],
    [0.00000040961, 3.79678095557, 306.58682461749],
    [0.00000048986, 2.66938282989, 198.0774244275],
    [0.00000042523, 6.01169442061, 22.3900997655],
    [0.00000037414, 4.2157636246, 397.14942586389],
    [0.00000043272, 5.65327724529, 28.32799059869],
    [0.00000047477, 5.6221366635, 224.70048777],
    [0.00000047665, 4.06141457601, 73.3284950214],
    [0.00000040139, 2.45661194468, 164.78486814511],
    [0.0000003777, 5.10261043077, 91.48774228611],
    [0.00000037294, 3.45883659652, 275.7943385166],
    [0.00000039829, 4.6446841659, 28.98238190449],
    [0.00000042462, 3.17137527571, 25.61967761299],
    [0.00000038602, 3.30935971278, 91.8032564712],
    [0.00000049996, 2.9547216524, 52.13086637091],
    [0.0000003712, 1.73214539662, 167.3331224364],
    [0.00000035657, 3.04424405945, 77.3130379112],
    [0.00000046968, 0.94955700094, 836.2777897121],
    [0.0000003677, 4.66251230729, 123.78346082721],
    [0.00000045438, 1.78673921122, 199.040632274],
    [0.00000048093, 4.63308338383, 3340.8562441833],
    [0.00000034133, 3.71275939849, 154.91482404881],
    [0.00000040987, 0.29444385242, 411.3765198655],
    [0.00000037167, 4.49302606958, 227.03629374021],
    [0.00000035365, 0.64363628623, 183.85033042589],
    [0.00000034349, 5.93570230021, 58.5630898155],
    [0.00000044963, 6.26050330647, 833.30884429549],
    [0.00000033485, 0.14708707923, 227.77000692311],
    [0.00000032838, 4.5031220334, 69.12115511239],
    [0.00000037229, 3.78657903383, 103.7639804718],
    [0.00000033396, 1.128173973, 92.2908914382],
    [0.00000043914, 6.119024431, 293.4323209195],
    [0.00000044941, 2.90130423263, 292.9446859525],
    [0.00000037327, 4.64523467597, 0.55933166859],
    [0.00000032513, 4.78887619836, 136.3136337994],
    [0.00000034574, 4.74251495333, 35.9291725665],
    [0.00000041936, 5.30204278018, 92.0638889021],
    [0.00000033257, 5.78096695807, 248.9676355736],
    [0.00000044206, 6.0280355495, 767.61290040431],
    [0.00000033118, 1.30670048356, 284.39235822571],
    [0.00000034173, 4.81499116474, 133.13224006171],
    [0.00000035868, 1.58130371706, 179.9181771628],
    [0.00000037508, 4.02104775804, 94.6691360238],
    [0.00000041561, 2.19963487826, 163.82166029861],
    [0.00000034188, 2.03038237166, 336.01877468221],
    [0.00000033991, 5.50380136919, 32.4389622881],
    [0.00000030436, 4.3422489282, 31.7845709823],
    [0.00000034876, 3.13365595903, 215.1941419686],
    [0.00000037259, 4.63049994218, 91.06705116081],
    [0.00000030353, 4.80546717458, 32.48714639791],
    [0.00000031931, 2.00592901309, 205.9417309537],
    [0.00000030008, 4.07053097233, 745.03386490949],
    [0.00000036558, 4.16073271737, 45.9659730016],
    [0.00000029428, 5.60962138278, 270.1652642241],
    [0.00000036881, 2.80082144083, 75.6161168818],
    [0.00000036881, 1.87858099517, 74.43471521981],
    [0.00000039559, 5.86593317582, 58.87190635621],
    [0.00000038377, 2.52859641796, 39.3736908626],
    [0.00000032329, 0.69441607084, 80.65449034331],
    [0.00000040007, 1.71381436107, 1744.6120500584],
    [0.00000029388, 5.29139433485, 530.89799042461],
    [0.00000031193, 3.77336776305, 9.1506537333],
    [0.00000034894, 3.35589064953, 143.5872394946],
    [0.00000029512, 1.39390842622, 958.33296034749],
    [0.00000029255, 0.84093803376, 415.7963080956],
    [0.00000029888, 3.51518270201, 163.1403367424],
    [0.00000032864, 4.3206651556, 94.0359965774],
    [0.00000035403, 6.01521697408, 31.73638687251],
    [0.00000036501, 5.48244229511, 142.9059159384],
    [0.00000032416, 2.85592816552, 114.6978061511],
    [0.00000028338, 2.1881212953, 528.9715747316],
    [0.0000003116, 4.24879587681, 118.15438653471],
    [0.00000034324, 4.04959387303, 57.3874336479],
    [0.00000033749, 4.26748008527, 42.78208713641],
    [0.00000034375, 2.3534729647, 326.62430346539],
    [0.00000029984, 4.74520755489, 90.52453443961],
    [0.00000035105, 5.45333895324, 230.8083883089],
    [0.00000031999, 3.50027972951, 216.51185833811],
    [0.00000030853, 0.71214846554, 8.84183719261],
    [0.00000034254, 0.33401313814, 228.83628063359],
    [0.00000027044, 1.46046017518, 27.96429230381],
    [0.00000027412, 3.1732781888, 221.40721944771],
    [0.00000026388, 3.20755787232, 45.82046852221],
    [0.00000032494, 3.35654630791, 1033.1145589148],
    [0.00000035994, 5.77252966919, 4.49148493169],
    [0.00000029345, 0.67141990161, 123.2958258602],
    [0.00000026034, 1.13088552844, 78.4699343469],
    [0.0000002665, 3.32642891132, 151.5039356475],
    [0.0000003103, 2.03320495111, 66.42739634171],
    [0.00000028238, 0.60698223844, 222.6165055101],
    [0.00000026518, 2.84813264424, 11.401392332],
    [0.00000026014, 4.66149750775, 447.448936179],
    [0.00000025836, 3.54055201502, 68.5450084964],
    [0.00000024852, 4.13613291119, 42.997027585],
    [0.00000033654, 4.92280929068, 54.5303628159],
    [0.00000024448, 2.54413564647, 269.6776292571],
    [0.0000003319, 0.33337097209, 141.9427080919],
    [0.00000024034, 0.04875875474, 327.9969015891],
    [0.00000031856, 1.82932365564, 1140.1394863965],
    [0.00000026275, 1.11499599456, 39.9162075838],
    [0.00000025887, 2.86658178193, 2.0438043769],
    [0.00000023665, 5.24877237951, 21.84758304429],
    [0.00000025701, 4.05288243063, 73.91345035801],
    [0.00000025701, 0.62652000537, 76.1373817436],
    [0.00000024158, 1.81862092102, 4.2096006414],
    [0.00000032085, 5.23560050501, 368.21391948681],
    [0.00000025732, 0.51306284591, 3.37951923889],
    [0.0000002427, 0.61765538541, 130.1969245399],
    [0.00000023775, 5.95144171122, 969.37866061139],
    [0.00000022911, 6.08737032038, 117.5636857037],
    [0.00000027148, 6.08119809462, 11.1776431628],
    [0.0000003142, 0.20608322775, 619.046541011],
    [0.00000030627, 5.0978314767, 91.1789257454],
    [0.00000029507, 0.35894321075, 565.35950523021],
    [0.00000025369, 2.77552012656, 81.13006322279],
    [0.00000027172, 2.89332627598, 25.516611749],
    [0.00000026354, 0.09318660287, 204.97852310719],
    [0.00000022571, 2.16687242605, 70.88081446661],
    [0.00000022904, 1.13841839619, 81.50582360521],
    [0.00000030825, 1.83861394951, 1439.75351563271],
    [0.00000025426, 1.66774350963, 133.34468838281],
    [0.00000027083, 4.09142271592, 105.0816968413],
    [0.00000023195, 0.51761268593, 90.57941619379],
    [0.00000022062, 0.12945216599, 189.1638905333],
    [0.00000022242, 5.02281259808, 86.1829908993],
    [0.00000023869, 1.09273091754, 413.8242004203],
    [0.0000002182, 3.8658894387, 34.86539098351],
    [0.00000029143, 5.55273035507, 616.07759559439],
    [0.00000026632, 3.9915025314, 100.8889111473],
    [0.00000023677, 3.63905075648, 541.2959970271],
    [0.00000030371, 1.42781024655, 401.4059020327],
    [0.00000023717, 3.96575925914, 45.7992166628],
    [0.00000027663, 4.12303428511, 405.747445573],
    [0.00000024084, 2.70826498302, 170.41394243761],
    [0.00000025601, 4.37491173191, 31.24875190549],
    [0.00000022288, 0.7951416596, 108.1625168425],
    [0.00000022857, 1.72644712161, 104.2303635794],
    [0.00000028908, 3.07758978128, 329.593248882],
    [0.0000002443, 4.94090312535, 49.42255338521],
    [0.00000023008, 2.06991447825, 217.16624964391],
    [0.00000020835, 5.08228935258, 141.208994909],
    [0.00000022817, 5.18839806192, 145.387226388],
    [0.00000020957, 2.51273449478, 79.170017635],
    [0.00000027954, 0.65571622008, 68.17250148091],
    [0.00000023022, 1.21699943524, 162.6527017754],
    [0.00000025411, 4.19619949189, 41.8883152591],
    [0.00000025079, 0.62989809784, 92.66339845371],
    [0.00000022779, 3.95591659633, 107.74182571721],
    [0.00000025092, 0.58786621007, 87.87110320809],
    [0.00000027016, 1.15672372488, 0.9945770089],
    [0.00000020414, 3.43554412854, 222.14093263061],
    [0.00000020185, 6.10485906657, 144.1779403256],
    [0.00000027094, 0.96491831662, 369.6983921951],
    [0.00000019466, 2.51873134984, 9.1573513777],
    [0.00000020822, 1.01932827109, 72.31710306511],
    [0.00000020822, 3.66007416491, 77.73372903651],
    [0.00000023312, 2.70078350147, 52.3914988018],
    [0.00000019238, 1.86487700903, 145.1411481721],
    [0.00000022156, 5.02188243292, 64.73047531231],
    [0.00000019648, 4.16422779161, 692.831301837],
    [0.00000018748, 1.24105948443, 289.8089841971],
    [0.00000019125, 1.53478805624, 22.6507321964],
    [0.00000024581, 6.19654419773, 20.20305164159],
    [0.00000021617, 3.27489383263, 251.8427048981],
    [0.0000002186, 2.01803891279, 38.11622069041],
    [0.00000021658, 2.82545321119, 30.9881194746],
    [0.00000021231, 0.7027422168, 55.38169607781],
    [0.00000025483, 3.0768488456, 41.08516610701],
    [0.00000021046, 1.95785166305, 58.0754548485],
    [0.00000022854, 6.17096810376, 167.07249000551],
    [0.00000018322, 3.37460503465, 165.8486497281],
    [0.00000018466, 0.61255161441, 380.847158323],
    [0.00000024739, 4.02369174706, 81.8783306207],
    [0.00000022782, 1.55690793162, 305.5899868762],
    [0.00000018449, 3.77998100899, 378.92074262999],
    [0.00000020493, 1.1008569952, 148.21066732521],
    [0.00000024545, 4.93054883789, 66.4610262365],
    [0.00000020079, 2.85442801367, 156.9205616189],
    [0.00000017465, 3.85472736449, 312.21589891],
    [0.00000021567, 5.83653540547, 225.5518210319],
    [0.0000002003, 2.22274854754, 134.30789622931],
    [0.00000017391, 2.86052314428, 73.0196784807],
    [0.00000019537, 3.96842200227, 140.4125434013],
    [0.00000022517, 5.23712494895, 248.70700314271],
    [0.00000017589, 5.07166000101, 303.3023650158],
    [0.00000020366, 1.99661694162, 97.65933329981],
    [0.00000022843, 3.92423636309, 758.5272457282],
    [0.00000021264, 0.07672955391, 330.080883849],
    [0.0000001698, 1.16080581329, 74.5678416638],
    [0.0000001698, 3.51859662271, 75.48299043781],
    [0.00000019715, 0.47343267408, 531.73476947149],
    [0.00000021989, 1.18511584463, 136.78920667889],
    [0.00000021616, 5.67519606472, 10.3263099009],
    [0.00000016752, 2.74060731702, 19.2543980101],
    [0.00000021941, 4.44343968337, 624.6756153035],
    [0.00000016246, 0.04665700154, 2119.00767786191],
    [0.00000016279, 5.73366744278, 1.12878064019],
    [0.00000016279, 5.73366744278, 1.61641560721],
    [0.00000022328, 1.70802820953, 97.9199657307],
    [0.00000019188, 0.23213047381, 14.3133449182],
    [0.00000022519, 2.42657916175, 165.3610147611],
    [0.00000020956, 3.16492203936, 330.9658470057],
    [0.00000018599, 4.26067160583, 148.4344164944],
    [0.00000018917, 0.97135259771, 255.2992852817],
    [0.00000021299, 6.02100084197, 95.52046928571],
    [0.00000019398, 2.01021052352, 408.19512612779],
    [0.0000002148, 5.61700303674, 1669.83045149109],
    [0.0000001573, 5.68185702607, 17.8817998864],
    [0.00000015989, 4.02642086421, 132.85705341579],
    [0.00000016213, 2.93808470604, 5.1728084879],
    [0.00000015494, 0.54839274859, 743.23387801611],
    [0.00000015346, 3.70238533639, 610.44852130189],
    [0.00000019338, 2.53133192689, 363.27286639489],
    [0.00000017882, 0.09108401185, 190.9089956725],
    [0.00000016009, 3.94767389914, 74.19533464831],
    [0.00000016009, 0.73172853686, 75.8554974533],
    [0.0000001845, 1.65175643591, 135.5799206165],
    [0.00000015066, 0.31979989608, 118.26626111931],
    [0.00000019811, 4.0095114062, 375.9517972134],
    [0.00000017887, 5.90368904573, 85.3203567893],
    [0.00000015552, 0.08354188367, 5.872891776],
    [0.00000015552, 3.22513453726, 5.385256809],
    [0.00000014946, 3.08926979326, 76.4617046493],
    [0.00000014946, 4.73172529633, 73.5891274523],
    [0.0000001866, 0.3801228462, 107.2687449652],
    [0.00000014573, 2.12795836718, 73.4927592327],
    [0.00000014573, 5.69303672241, 76.55807286891],
    [0.00000015019, 5.37079041514, 64.0915903715],
    [0.00000017892, 4.39093243602, 231.8052260502],
    [0.00000015543, 1.73241272133, 66.118579801],
    [0.00000018436, 2.04970589009, 549.8940167362],
    [0.00000015371, 4.16535208222, 736.1203310153],
    [0.00000017668, 4.7517189082, 378.39947776819],
    [0.00000014688, 5.67350374112, 17.91542978119],
    [0.00000014089, 6.04399723949, 63.86784120231],
    [0.00000015759, 0.66494464321, 104.25161543881],
    [0.00000016874, 0.38165130786, 84.0990086394],
    [0.00000015468, 5.57539923988, 515.70768857651],
    [0.00000017006, 5.22922131058, 106.2573530089],
    [0.00000015683, 3.2898419921, 46.8173062635],
    [0.00000015035, 4.57350717142, 490.09027169589],
    [0.00000013767, 6.18350808152, 535.6669227346],
    [0.00000014034, 2.11722923267, 281.210964488],
    [0.00000013418, 2.06565331098, 70.02948120471],
    [0.00000013418, 2.61381320215, 80.0213508969],
    [0.00000018602, 3.25562899138, 366.24181181149],
    [0.00000016062, 0.58179678004, 73.28031091161],
    [0.00000016062, 0.95601300237, 76.77052119001],
    [0.00000018697, 2.78388202981, 130.1632946451],
    [0.0000001383, 1.11702813589, 278.2756489662],
    [0.00000016797, 2.01380545416, 157.5112624499],
    [0.00000016797, 2.01380545416, 157.0236274829],
    [0.00000013389, 1.94700710476, 118.6299594142],
    [0.00000014382, 1.07444330581, 194.5323323949],
    [0.0000001709, 3.77525528381, 60.79832204921],
    [0.00000013114, 5.75071250253, 883.5513617802],
    [0.00000016641, 4.93681909681, 118.3144452291],
    [0.00000013074, 2.58966287329, 12.2527255939],
    [0.00000013153, 1.19799339989, 225.10987804721],
    [0.00000013157, 3.23166717004, 122.08653979781],
    [0.00000016504, 5.59782240944, 285.35556607221],
    [0.00000013716, 2.96104442245, 1096.8504572182],
    [0.00000012748, 4.05495720199, 18.7667630431],
    [0.00000016958, 2.72238344622, 49.0018622599],
    [0.00000014158, 5.60862153409, 147.801277048],
    [0.00000014666, 5.66230491756, 0.50694204189],
    [0.00000016964, 3.07409416856, 64.9429236334],
    [0.00000016167, 5.52679984001, 176.894349992],
    [0.00000017434, 5.75265280703, 381.3684231848],
    [0.00000012702, 2.52948406017, 141.4550731249],
    [0.00000012494, 1.91017999465, 196.01680510321],
    [0.00000013527, 4.74412448417, 73.70100203691],
    [0.00000013527, 3.07687060542, 76.3498300647],
    [0.00000014805, 5.14044638199, 97.17169833279],
    [0.00000012844, 2.29225207494, 322.3678272966],
    [0.00000013194, 2.71389070536, 552.34169729099],
    [0.00000012712, 3.5042525963, 748.9660181726],
    [0.00000013959, 4.48592210118, 60.3563790645],
    [0.00000016442, 2.74965824817, 83.6234357599],
    [0.00000012305, 0.28180529137, 14.7340360435],
    [0.00000016319, 1.99654524305, 703.8770021009],
    [0.00000012524, 2.98932965871, 501.62360692681],
    [0.00000013101, 3.29177766895, 112.6708167216],
    [0.00000013451, 4.85214091855, 196.3805033981],
    [0.00000016729, 4.42229507842, 336.5949212982],
    [0.00000015662, 4.17010855511, 124.7466686737],
    [0.00000016361, 3.46994237608, 853.4401992355],
    [0.00000015016, 3.81955733385, 193.4115579815],
    [0.00000013452, 4.41360988031, 172.4409318671],
    [0.00000014832, 0.90688277736, 115.6061322434],
    [0.00000011802, 3.34670161742, 34.28713329129],
    [0.0000001164, 6.04651347369, 105.13657859549],
    [0.0000001233, 2.9226931288, 83.93225230061],
    [0.00000011536, 1.30362312663, 241.3664536058],
    [0.00000011526, 5.08916626368, 628.6077685666],
    [0.00000013571, 3.22260253533, 205.46615807421],
    [0.00000011579, 0.67710960978, 65.57606307981],
    [0.00000011468, 1.57270808839, 416.79314583689],
    [0.00000011443, 2.37400000837, 20.6906866086],
    [0.00000012105, 0.14668124624, 43.84836084689],
    [0.00000013131, 3.46217186244, 288.4912678276],
    [0.0000001405, 4.60806116381, 323.74923414091],
    [0.00000012885, 5.21981764477, 283.9047232587],
    [0.00000015266, 1.42284221306, 906.130397275],
    [0.0000001109, 2.16462545354, 56.11540926071],
    [0.00000015022, 1.5780004496, 438.0544649622],
    [0.0000001169, 1.28789549386, 256.18424843839],
    [0.00000010863, 1.57144632008, 230.0052391568],
    [0.00000010598, 0.35796336114, 11.6050319325],
    [0.00000010559, 1.69974127789, 466.5143984598],
    [0.0000001167, 4.42259077763, 308.93143930831],
    [0.00000014228, 1.61252694327, 85.10790846821],
    [0.0000001482, 4.17825476069, 154.0546820663],
    [0.00000011614, 0.84927799349, 140.90017836831],
    [0.00000012388, 5.09110502089, 1171.63205578549],
    [0.0000001258, 0.51522053651, 114.1216595351],
    [0.00000012667, 6.01888757437, 38.85242600079],
    [0.00000012598, 0.72205960279, 1819.3936486257],
    [0.0000001326, 5.77871434104, 77.7191748215],
    [0.00000014442, 5.84453911482, 82.24202891559],
    [0.00000013709, 5.11783507369, 109.0687318586],
    [0.00000010566, 1.35962843525, 1107.8961574821],
    [0.00000012906, 1.98542091304, 757.5640378817],
    [0.00000012022, 0.39178256727, 207.6386519831],
    [0.00000011539, 5.68756950373, 75.5948650224],
    [0.00000011539, 5.27501823945, 74.45596707921],
    [0.00000010478, 5.55035662837, 72.090100529],
    [0.00000013623, 1.2042321068, 406.3469551246],
    [0.00000010221, 0.47130697459, 66.6734745576],
    [0.000000134, 3.51530110476, 25.8466801491],
    [0.00000012805, 1.73149783747, 124.5342203526],
    [0.00000010035, 3.75323450486, 82.6145359311],
    [0.00000009987, 0.79147161221, 115.1854411181],
    [0.00000010797, 2.77657277725, 199.3158189199],
    [0.00000009996, 0.52088482718, 59.038662695],
    [0.00000010812, 0.46401017699, 89.2525100524],
    [0.00000013348, 0.57976101887, 139.7581520955],
    [0.00000012606, 2.70123732269, 28.5549931348],
    [0.00000009781, 4.00229285265, 84.47476902181],
    [0.00000009902, 1.62968500763, 262.77653057739],
    [0.00000010352, 0.8115255642, 361.62163734781],
    [0.00000010581, 5.29068527712, 679.8134938978],
    [0.00000010976, 4.56885713555, 209.0894947966],
    [0.00000011881, 5.2923055359, 827.67977000299],
    [0.00000010568, 4.17744029529, 177.0611063308],
    [0.00000011169, 3.19909284892, 318.43567403349],
    [0.00000010655, 3.65009353213, 264.2061215315],
    [0.00000010248, 4.87010430516, 65.63094483399],
    [0.00000009768, 5.60017209442, 422.42222012939],
    [0.00000011423, 3.52166240719, 679.4979797127],
    [0.00000011319, 5.77253068317, 43.79347909271],
    [0.00000010444, 2.0821247722, 64.2403482178],
    [0.00000010733, 0.19348042611, 89.6944530371],
    [0.00000009435, 2.65961671499, 59.83511420271],
    [0.00000010593, 2.48672884196, 71.9445960496],
    [0.00000010332, 4.9818646728, 61.0444002651],
    [0.00000010962, 2.11147523367, 526.00262931501],
    [0.00000011184, 2.96936696687, 150.6101637702],
    [0.00000010812, 3.7684838114, 546.71262299849],
    [0.00000010427, 0.3221010838, 106.0303504728],
    [0.00000009926, 0.10882768465, 767.1252654373],
    [0.00000012114, 5.36578468862, 404.86248241631],
    [0.00000009406, 5.72421215324, 69.5564004527],
    [0.00000009406, 5.23837558994, 80.4944316489],
    [0.00000010953, 3.07486144408, 57.86300652739],
    [0.00000012472, 3.4272651151, 337.5581291447],
    [0.000000093, 5.90247156785, 831.3487987077],
    [0.00000010211, 1.92534998559, 544.1618765797],
    [0.00000009945, 2.81330302968, 192.935985102],
    [0.0000001125, 5.5745527631, 544.2649424437],
    [0.00000009524, 1.19760937655, 217.68751450571],
    [0.00000008854, 2.95194128004, 210.36151918381],
    [0.00000010193, 2.85819678368, 443.6198487799],
    [0.00000009954, 5.11935965746, 79.8513411912],
    [0.00000009954, 5.8432089968, 70.1994909104],
    [0.0000000993, 0.62899045525, 63.0165079404],
    [0.0000000865, 1.47118969332, 533.1161763158],
    [0.00000010719, 2.7192970604, 399.9214293244],
    [0.00000012021, 2.02390354619, 54.89406111079],
    [0.0000001105, 1.3769056289, 210.60759739969],
    [0.00000010384, 4.2874739155, 30.3549800282],
    [0.00000010014, 6.20125275236, 419.2408263917],
    [0.00000011868, 2.96967485309, 353.5448825005],
    [0.000000115, 3.40411765505, 402.89037474099],
    [0.00000010255, 4.7294317234, 30.9332377204],
    [0.00000008996, 3.098338305, 179.0332140061],
    [0.00000011583, 0.98746991822, 754.5950924651],
    [0.00000010299, 1.57297771598, 112.8978192577],
    [0.00000008391, 4.97268364529, 231.1808953244],
    [0.00000009702, 1.22534705521, 181.03895157621],
    [0.00000008169, 1.42365397432, 674.1844196053],
    [0.0000000958, 4.84883749459, 292.2566647519],
    [0.00000008174, 4.64994635843, 121.59890483079],
    [0.00000010408, 5.25476225428, 533.8669358412],
    [0.00000009226, 5.2594801274, 74.1103923141],
    [0.00000009226, 5.70310761578, 75.94043978751],
    [0.00000008015, 6.04785554826, 350.5759370839],
    [0.0000000933, 6.27465213976, 53.0458901076],
    [0.00000009204, 2.03165601534, 223.6254053389],
    [0.00000008485, 2.34094108621, 212.579705075],
    [0.00000008003, 0.91246310178, 1022.0688586509],
    [0.00000008044, 0.83166336147, 77.361222021],
    [0.00000008044, 3.84773907453, 72.68961008061],
    [0.00000010452, 1.98498356773, 841.9068640046],
    [0.00000007961, 2.31145265393, 43.3727879674],
    [0.00000008333, 1.18342051201, 152.09463647851],
    [0.00000009216, 2.14207964363, 670.2522663422],
    [0.00000009064, 5.27663226147, 153.4303513405],
    [0.00000007893, 2.51477711531, 93.9354228409],
    [0.00000009501, 3.98117068682, 156.7081132978],
    [0.00000009347, 0.34595548426, 157.22937815961],
    [0.00000008617, 2.59731331592, 85.8104838838],
    [0.00000007939, 2.06846952168, 109.2262984255],
    [0.00000008607, 4.69708547234, 63.17656663481],
    [0.00000010579, 4.46292936018, 17.76992530181],
    [0.00000007543, 3.14113560246, 77.2606482845],
    [0.00000007543, 4.67985948713, 72.79018381711],
    [0.00000008486, 3.16231049397, 78.106236052],
    [0.00000009532, 1.91025418881, 835.28095197081],
    [0.00000007509, 4.96017180762, 216.72430665921],
    [0.00000008683, 2.90960249329, 117.77862615229],
    [0.00000007488, 2.09613529005, 90.2157178989],
    [0.00000009008, 1.59995368963, 175.6705097146],
    [0.00000007543, 2.16991727809, 74.2917028679],
    [0.00000007543, 5.6510778115, 75.75912923371],
    [0.00000008913, 1.43842918678, 683.74564716089],
    [0.0000000828, 5.45801088768, 216.2366716922],
    [0.00000010165, 5.74311979024, 1364.9719170654],
    [0.00000007591, 3.10048399132, 351.5727748252],
    [0.00000008205, 3.52665267682, 37.4136452748],
    [0.00000007588, 3.28488331617, 198.5650593945],
    [0.00000008473, 3.11905002019, 71.2533214821],
    [0.00000008473, 1.56035241581, 78.79751061951],
    [0.00000009107, 3.10384486237, 37.15301284391],
    [0.00000007766, 4.05884078794, 1479.11039154791],
    [0.00000008403, 4.51384294317, 253.2153030218],
    [0.00000007642, 2.21841304053, 49.96507010641],
    [0.00000009234, 1.16089511561, 166.84548746939],
    [0.00000008874, 5.92801753842, 483.4643596621],
    [0.00000007128, 0.54929503334, 173.6984020393],
    [0.00000007872, 2.8347938342, 437.8877086234],
    [0.00000009185, 1.9961219671, 101.04896984171],
    [0.00000007312, 6.13883546415, 526.7533888404],
    [0.00000009194, 1.81474760228, 97.4323307637],
    [0.00000008182, 2.53164006705, 115.8667646743],
    [0.00000009663, 6.15396199238, 763.1931121742],
    [0.00000008486, 3.78958880101, 242.11472100371],
    [0.00000008799, 0.25004467051, 366.7294467785],
    [0.00000008458, 1.58462208087, 297.9888049084],
    [0.00000008904, 1.84053989684, 60.2076212182],
    [0.00000007575, 5.75688781236, 214.506120768],
    [0.00000006999, 5.60818664108, 144.6992051874],
    [0.00000008, 3.63615956812, 325.1398307571],
    [0.00000008498, 3.89791695768, 20.7388707184],
    [0.00000009641, 3.89512516279, 56.8997986809],
    [0.00000007094, 6.10443989292, 49.75262178531],
    [0.00000007954, 4.06222552835, 87.03432416121],
    [0.0000000697, 1.96111327573, 130.7964340915],
    [0.00000007608, 5.47728460394, 409.31590054121],
    [0.00000007168, 5.6451845734, 1265.81129610991],
    [0.00000008728, 3.53511019168, 78.99119920869],
    [0.00000007572, 0.17135144497, 148.9132427408],
    [0.00000006783, 3.03195983082, 555.3106427076],
    [0.00000008481, 4.53301555531, 119.2630988606],
    [0.00000007247, 2.82713079705, 33.26904369061],
    [0.00000006911, 5.67453645573, 41.5125548767],
    [0.00000006813, 2.64716458917, 301.17019864609],
    [0.0000000847, 4.08048553109, 250.191475851],
    [0.00000006549, 2.37816417441, 129.360145493],
    [0.00000006543, 2.96794347356, 44.3696257087],
    [0.00000008617, 3.14518586851, 150.70078649541],
    [0.00000007676, 4.83443438533, 60.46825364911],
    [0.00000008905, 0.03447668306, 749.82616015511],
    [0.00000007175, 5.62428004061, 445.96446347071],
    [0.00000006465, 5.46336528208, 75.50098893029],
    [0.00000007106, 0.97448145412, 6456.63624021419],
    [0.0000000722, 5.10879667762, 1692.40948698591],
    [0.00000006926, 0.91784419155, 20.9056270572],
    [0.00000007786, 2.71967618992, 100.4012761803],
    [0.00000006164, 1.79214990956, 1376.0176173293],
    [0.00000007312, 4.44944337943, 188.9032581024],
    [0.00000006788, 6.26547457533, 86.8742654668],
    [0.00000006246, 2.99700510018, 14.57397734909],
    [0.00000006057, 4.7754860403, 267.71758366931],
    [0.00000007767, 3.63015905985, 95.7354097343],
    [0.00000007632, 5.85317558953, 22.22334342671],
    [0.00000006881, 3.80941789384, 163.87654205279],
    [0.00000006523, 0.41741185861, 368.83825021259],
    [0.00000006006, 1.06015938578, 560.9397170001],
    [0.00000006916, 2.44549964284, 497.69145366371],
    [0.00000007042, 4.03629417682, 39.1130584317],
    [0.00000007444, 0.25903368767, 396.785727569],
    [0.00000007949, 1.74199043054, 474.7030278917],
    [0.00000007441, 5.03533974603, 260.01333583751],
    [0.00000008032, 0.83846257555, 224.0673483236],
    [0.00000005746, 2.56394284072, 193.0478596866],
    [0.00000005743, 4.76658104509, 20201.98247923659],
    [0.00000007757, 3.79185602312, 688.41151360689],
    [0.00000007329, 0.85857969446, 237.17366791179],
    [0.00000005919, 0.50982288637, 17.39416491939],
    [0.00000006252, 5.02682854905, 132.16903221521],
    [0.0000000587, 4.28917302578, 690.8591941617],
    [0.00000006964, 3.02573149302, 197.5561595657],
    [0.00000007219, 5.43456429689, 266.9693162714],
    [0.00000007947, 5.61352830758, 514.46929408409],
    [0.00000007626, 3.67423708438, 842.3944989716],
    [0.00000006895, 1.47957605481, 425.35753565121],
    [0.00000006665, 2.95467155233, 436.5699922539],
    [0.00000006291, 1.67292148805, 343.49601997789],
    [0.0000000614, 4.35860072087, 213.7096692603],
    [0.00000005915, 0.86094320174, 62.75587550951],
    [0.00000005915, 3.81845923426, 87.2949565921],
    [0.00000006781, 4.05060060272, 647.25465079831],
    [0.00000006309, 2.99140195909, 178.3788227003],
    [0.00000005782, 3.22810004423, 401.2940274481],
    [0.00000007776, 5.11993350983, 204.9448932124],
    [0.00000006809, 1.08727914779, 291.9478482112],
    [0.0000000568, 4.1740903768, 79.6455905145],
    [0.00000005958, 3.65881665841, 808.7697632129],
    [0.0000000585, 6.26855076332, 358.6526919312],
    [0.00000005624, 0.99993676157, 42.3090063844],
    [0.00000007759, 1.83986340459, 79.273083499],
    [0.00000005495, 0.83012628966, 159.2081834793],
    [0.00000005488, 2.05261070153, 293.95358578131],
    [0.00000007423, 5.31470022391, 139.72452220071],
    [0.0000000557, 5.97928286717, 187.9949320101],
    [0.00000006894, 3.28434910878, 407.8314278329],
    [0.00000005539, 4.84676356044, 1235.3679540889],
    [0.00000006394, 4.15130654566, 956.53297345411],
    [0.00000005577, 4.10482070615, 168.92946972931],
    [0.00000006276, 4.68793579564, 97.004941994],
    [0.00000007541, 4.08226152277, 303.87851163179],
    [0.00000006343, 4.90270462176, 164.36417701981],
    [0.00000006353, 3.79216315882, 370.2196570569],
    [0.0000000539, 6.26914064855, 818.0154765834],
    [0.00000005777, 5.82865048284, 271.3745502865],
    [0.00000006126, 5.65499715014, 45.2297676912],
    [0.00000005488, 2.09536392742, 136.47369249381],
    [0.00000006742, 2.83749217354, 89.84321088341],
    [0.00000006582, 2.42682862426, 1291.1871562394],
    [0.00000005219, 0.45337461954, 7.62048904269],
    [0.00000006692, 3.14805000647, 5994.75133850259],
    [0.00000006355, 1.10707964029, 184.48346987229],
    [0.00000007139, 0.98849473241, 359.173956793],
    [0.00000006215, 4.74107554828, 1582.2031657665],
    [0.00000005605, 1.54167032387, 43.484662552],
    [0.00000005449, 2.13791600611, 229.0969130645],
    [0.00000005787, 4.9220892283, 492.06237937121],
    [0.00000006553, 5.75663546509, 1065.35788782919],
    [0.0000000534, 5.86372959256, 27.4979091962],
    [0.00000005124, 0.67325293181, 479.532206399],
    [0.00000005421, 1.88003343531, 298.8825767857],
    [0.00000005261, 2.44962785242, 211.5708052462],
    [0.0000000642, 3.70476513286, 489.0934339546],
    [0.00000005889, 0.82353860057, 1514.5351142],
    [0.00000004956, 2.5739948133, 450.41788159561],
    [0.0000000645, 4.59218190917, 9924.96103472219],
    [0.0000000494, 2.100149563, 20.953811167],
    [0.00000005847, 6.13596901282, 89.5825784525],
    [0.000000056, 1.83545214397, 241.8540885728],
    [0.00000006152, 3.35545390167, 524.5181566067],
    [0.00000006088, 1.15145874834, 711.6931245173],
    [0.00000005407, 2.11877006223, 148.1624832154],
    [0.00000006327, 4.93432455338, 300.6489337843],
    [0.0000000549, 2.36691010165, 261.81332273089],
    [0.0000000528, 0.85359725433, 74.4259064992],
    [0.00000004835, 1.17492690523, 122.77456099839],
    [0.00000005417, 2.10462006768, 34.1840674273],
    [0.00000005465, 4.18396714587, 49.8956341372],
    [0.00000004962, 1.68097237142, 40.49446527601],
    [0.00000005202, 5.00837530618, 102.27950776349],
    [0.00000005768, 5.58499792979, 237.9219353097],
    [0.00000005794, 4.82130895886, 215.99059347631],
    [0.00000006057, 3.19358889572, 1595.0488529238],
    [0.00000006144, 4.72437637687, 456.9531709042],
    [0.00000005439, 4.81364730924, 164.1371744837],
    [0.00000006169, 3.17120830135, 2199.5214165857],
    [0.00000005803, 5.22454044783, 476.07562601539],
    [0.00000004737, 2.35530993243, 905.64276230799],
    [0.00000004927, 3.2646859892, 752.8981714357],
    [0.00000004656, 1.91522169679, 89.0949434855],
    [0.00000005228, 1.17862548607, 112.63718682681],
    [0.00000005103, 3.73018774429, 93.5483616104],
    [0.00000004793, 3.53993726451, 257.14745628489],
    [0.00000005517, 0.15731395881, 85.95924173011],
    [0.00000005174, 4.15935293996, 460.8853241673],
    [0.000000046, 4.89133583119, 693.82813957829],
    [0.00000005568, 2.10167962126, 346.1561488538],
    [0.0000000575, 6.24007416703, 475.11241816889],
    [0.00000005821, 5.49083686705, 331.9290548522],
    [0.00000005474, 1.31183557573, 119.0963425218],
    [0.00000005555, 4.65024532079, 166.58485503849],
    [0.00000004721, 0.86426769065, 818.33099076849],
    [0.00000004598, 2.05332533302, 155.43608891061],
    [0.00000004983, 2.57975544514, 305.3629843401],
    [0.00000004604, 5.38714042066, 240.6302482954],
    [0.00000004534, 4.08633266459, 426.3543733925],
    [0.0000000603, 2.63010642372, 928.22179780281],
    [0.00000005073, 4.70022198384, 119.151224276],
    [0.000000048, 5.53046784681, 133.82026126229],
    [0.00000005861, 5.51556326816, 441.51104534581],
    [0.00000004509, 2.39065356016, 106.67804413421],
    [0.0000000499, 3.48465520513, 53.40958840249],
    [0.00000005764, 3.63891986766, 896.08153475239],
    [0.00000005407, 4.74700481244, 469.48334387639],
    [0.00000005823, 4.10358787531, 29.5036467663],
    [0.00000005944, 3.4654583225, 235.9498276344],
    [0.00000006147, 1.45101996869, 1288.21821082279],
    [0.00000004598, 1.27745263577, 224.32798075451],
    [0.00000005709, 2.76379658634, 893.1125893358],
    [0.00000004523, 5.13323251802, 530.0948412725],
    [0.00000005024, 5.31536294883, 314.6635794648],
    [0.00000004527, 4.89680450095, 100.2982103163],
    [0.0000000451, 2.34852903978, 529.7747238837],
    [0.00000005026, 3.92555320684, 74.6496556684],
    [0.00000005303, 1.08916276416, 273.8222308413],
    [0.0000000438, 0.99003902246, 1578.2710125034],
    [0.00000005525, 0.86348547164, 453.1810763355],
    [0.00000004962, 3.52820328545, 810.90192958261],
    [0.00000004972, 0.1987984858, 334.89800026879],
    [0.00000005401, 1.93836334655, 193.6721904124],
    [0.00000005498, 0.7147326667, 230.58138577279],
    [0.00000004501, 5.84903184251, 523.71500745461],
    [0.00000004303, 3.18721779031, 1246.4136543528],
    [0.00000005261, 4.82838100342, 170.2538837432],
    [0.00000004481, 1.75705854176, 5.35162691421],
    [0.00000004655, 2.79973352045, 178.43370445449],
    [0.00000005029, 0.22047838377, 193.93282284329],
    [0.00000005743, 3.5611565305, 246.68001371321],
    [0.00000005652, 0.86613579011, 315.41184686271],
    [0.00000004604, 3.09918959502, 1072.47143483],
    [0.00000005494, 3.15712757827, 1044.6478941457],
    [0.00000004789, 3.80684950331, 361.7883936866],
    [0.00000005139, 5.49982663321, 223.20720634109],
    [0.0000000531, 3.4311445616, 444.4799907624],
    [0.00000004815, 4.45553109137, 3041.2422149471],
    [0.00000004119, 2.1351022193, 2120.4921505702],
    [0.00000004552, 0.42701637654, 158.5081001912],
    [0.00000004594, 0.59274325201, 1310.1495526562],
    [0.00000004173, 5.85016751929, 181.4026498711],
    [0.0000000409, 2.28062400769, 138.6494397696],
    [0.00000004884, 5.20933688234, 6.65728119619],
    [0.0000000474, 2.65617621588, 25788.53292982149],
    [0.00000005699, 2.84935340269, 772.8325844196],
    [0.00000005296, 1.4181232543, 694.7913474248],
    [0.00000004555, 3.11995889142, 154.42718908179],
    [0.00000004669, 4.97123639115, 127.8274886749],
    [0.00000004509, 1.69077891813, 227.3518079253],
    [0.00000004302, 2.50409604966, 100.0857619952],
    [0.00000004027, 4.03844514423, 294.0566516453],
    [0.00000004114, 2.93977154621, 383.0653442142],
    [0.00000004552, 6.22515109598, 1361.0397638023],
    [0.00000004653, 4.63772962271, 1019.5206043596],
    [0.00000004849, 6.23804934917, 119.1175943812],
    [0.00000004617, 4.88910884699, 887.4835150433],
    [0.00000005166, 0.9301781108, 49.26498681829],
    [0.00000005543, 2.55030758424, 296.50433220009],
    [0.00000003936, 1.95688941946, 137.79810650771],
    [0.00000003959, 3.93854751155, 151.1796127418],
    [0.00000004546, 0.76154188637, 44.42661853911],
    [0.00000004195, 1.28923343857, 305.2142264938],
    [0.00000003911, 5.57516730393, 1020.2688717575],
    [0.00000003906, 1.61616341819, 36.41929966101],
    [0.0000000498, 0.97997283118, 682.78243931439],
    [0.00000003894, 6.27535408135, 13.770828197],
    [0.00000004225, 5.37063958024, 310.73142620169],
    [0.00000003999, 5.57100133771, 93.98781246761],
    [0.00000003999, 5.39158640547, 56.063019634],
    [0.00000004072, 2.47052943106, 956.8484876392],
    [0.0000000416, 5.20231534295, 138.92807069299],
    [0.0000000387, 3.52554234711, 316.14805217309],
    [0.00000005282, 1.35031701337, 442.9955180541],
    [0.00000003856, 4.9826263427, 778.1709657012],
    [0.00000005026, 2.04291728735, 252.8997888367],
    [0.00000004872, 3.77484767846, 196.5929517192],
    [0.00000004088, 3.31585670195, 770.5818458209],
    [0.00000003976, 0.29724722006, 34.44469985821],
    [0.00000003976, 3.43883987365, 33.9570648912],
    [0.00000004425, 1.385600898, 621.98185653281],
    [0.00000003827, 4.15987194313, 29.812463307],
    [0.00000004303, 5.49962330361, 302.3940389235],
    [0.00000004082, 2.9379504328, 76.9854616386],
    [0.00000004775, 3.44144906594, 379.25961975071],
    [0.00000004866, 3.05946215728, 349.12509427039],
    [0.00000004558, 3.79281085339, 484.6736457245],
    [0.00000003896, 3.48090977966, 525.7419968841],
    [0.0000000379, 2.68849385464, 168.81759514471],
    [0.00000004584, 2.02400920188, 30.41197285861],
    [0.00000003789, 4.87731374266, 225.58545092669],
    [0.00000003919, 3.8713055519, 367.6144099352],
    [0.00000004495, 0.77984598931, 823.74761673989],
    [0.00000004071, 1.17727620682, 152.28832506769],
    [0.00000004431, 2.72709685973, 781.8399944059],
    [0.00000003787, 2.48815838156, 96.2230447013],
    [0.00000003738, 4.07013940817, 909.6867901557],
    [0.00000003824, 3.30062177264, 81.0181886382],
    [0.000000051, 0.20422183986, 786.47472308461],
    [0.00000004678, 5.03406582155, 294.42915866079],
    [0.00000004456, 1.79112458929, 473.4154971395],
    [0.00000004182, 0.18466444565, 109.9625037359],
    [0.00000004721, 4.73119528048, 487.6425911411],
    [0.00000004194, 4.10486683345, 135.8259988324],
    [0.0000000415, 0.8776138387, 208.6018598296],
    [0.00000003881, 3.18364105348, 527.4871020233],
    [0.00000005003, 2.80882112541, 26088.1469590577],
    [0.00000004925, 5.52756833519, 104.82106441041],
    [0.00000004629, 5.06094518975, 324.97307441831],
    [0.00000003764, 3.88568266144, 81.17575520511],
    [0.00000003764, 3.93531242815, 68.8750768965],
    [0.00000004634, 3.50032175228, 439.53893767049],
    [0.00000004661, 4.44746944301, 1031.63008620649],
    [0.00000004246, 1.5956164075, 290.8752579076],
    [0.00000004701, 4.20435344056, 292.572178937],
    [0.00000004168, 3.07866792955, 347.6888056719],
    [0.00000003574, 0.81177194493, 101.8521189938],
    [0.00000004316, 5.40388665351, 1034.5990316231],
    [0.00000004648, 4.59798157023, 701.01993126891],
    [0.00000005, 4.96762725751, 636.423890983],
    [0.0000000495, 1.58366506104, 901.71060904489],
    [0.00000004343, 3.9194455706, 372.77040347569],
    [0.00000003612, 0.3707722903, 154.3153144972],
    [0.0000000418, 4.53703226837, 304.99047732459],
    [0.00000003767, 1.75098839325, 1040.97886544099],
    [0.00000004105, 3.02027598948, 1169.5714364612],
    [0.00000004389, 3.06369646718, 67.6366824041],
    [0.0000000361, 1.32047712869, 969.86629557841],
    [0.00000003589, 4.99114813732, 1340.5928946772],
    [0.00000004184, 4.66399157943, 1575.08961876571],
    [0.00000004327, 0.92906184743, 470.44655172289],
    [0.00000003635, 2.3642166506, 618.0497032697],
    [0.00000004568, 4.98874622103, 374.46732450509],
    [0.00000004014, 3.27163799518, 191.07575201129],
    [0.00000003518, 2.98191800179, 812.70191647599],
    [0.00000004543, 5.05516422535, 18.87863762769],
    [0.00000004255, 4.93411147571, 257.78059573129],
    [0.00000003536, 0.842495964, 1158.78636862821],
    [0.00000004782, 0.83189462557, 20.363110336],
    [0.0000000358, 5.11301333129, 155.7997872055],
    [0.00000004461, 4.71187230264, 155.9116617901],
    [0.00000004866, 2.95132293953, 16.8549015651],
    [0.00000004353, 4.31191357131, 154.5423170333],
    [0.0000000377, 4.63520445622, 238.91877305099],
    [0.0000000378, 4.53874966526, 250.3582321898],
    [0.00000004854, 0.38485985963, 823.12328601411],
    [0.00000004833, 3.23674545351, 1894.66288216001],
    [0.00000003662, 1.40177918208, 319.92014674179],
    [0.00000003977, 5.68574160053, 326.1969146957],
    [0.00000003861, 5.7443836957, 47.9929624311],
    [0.00000004433, 5.42313050798, 1685.2959399851],
    [0.00000004182, 3.13684968245, 548.40954402789],
    [0.00000003421, 3.51995958462, 605.03189533049],
    [0.00000003876, 3.9936360142, 302.13340649259],
    [0.00000004008, 1.83807922875, 6137.20098863639],
    [0.000000045, 1.38119932706, 47.3049412305],
    [0.0000000405, 1.29963474565, 6.46359260701],
    [0.00000003411, 1.31630185032, 997.68983626269],
    [0.00000004312, 4.01040874514, 847.811124943],
    [0.00000003428, 1.55247050413, 71.3563873461],
    [0.00000003928, 6.23536924317, 395.3012548607],
    [0.0000000365, 0.23968284456, 1254.27796087899],
    [0.00000003844, 5.28920917279, 121.4958389668],
    [0.00000003966, 1.48989873375, 761.49619114479],
    [0.00000003497, 4.1724168008, 319.3294459108],
    [0.0000000351, 5.54109119947, 273.34665796181],
    [0.00000003408, 5.53135426605, 1016.3367184944],
    [0.00000004206, 0.51867358485, 435.44002806861],
    [0.00000003372, 5.55788408036, 213.4947288117],
    [0.00000003369, 2.47122903489, 213.5910970313],
    [0.00000004154, 3.96250853547, 357.16821922291],
    [0.00000003966, 4.88587910106, 185.3348031342],
    [0.00000004636, 5.10105010921, 6169.9173983028],
    [0.00000004042, 6.22077286894, 432.471082652],
    [0.00000003366, 2.66012811137, 699.4572138708],
    [0.00000003632, 4.5976769934, 771.05741870039],
    [0.00000003967, 5.95729548122, 280.2477566415],
    [0.00000003436, 1.80871659193, 182.3658577176],
    [0.00000004588, 6.17666653669, 25483.18676042879],
    [0.00000003825, 4.86834262213, 6129.3366821102],
    [0.00000003243, 4.36468243327, 279.9725699956],
    [0.00000004579, 1.69365778926, 2735.89604555439],
    [0.00000004222, 4.00381650923, 344.9468627914],
    [0.00000004222, 4.00381650923, 344.45922782439],
    [0.00000003528, 2.89373582714, 187.78248368899],
    [0.00000003976, 0.47836354163, 433.4342904985],
    [0.00000003885, 1.59237659251, 254.33607743521],
    [0.00000003256, 3.7611645806, 1756.1453852893],
    [0.0000000345, 5.70924350001, 1336.6607414141],
    [0.00000003763, 3.02653659982, 598.77849031221],
    [0.00000003661, 3.87306757949, 523.9968917449],
    [0.00000003764, 0.31801539201, 498.6546615102],
    [0.00000003218, 5.81500080361, 829.37669103239],
    [0.00000003783, 3.26079140282, 10067.41068485599],
    [0.00000004463, 5.63073311182, 686.71459257749],
    [0.00000003955, 0.5139861998, 386.9974974773],
    [0.00000003269, 2.24915426287, 90.8064187299],
    [0.00000003268, 2.43000508529, 59.2444133717],
    [0.0000000354, 0.11026568904, 313.1791067565],
    [0.00000003535, 4.93360466961, 78039.12081153718],
    [0.00000003318, 1.03787086284, 522.3336006103],
    [0.00000003173, 0.85372362523, 1475.1782382848],
    [0.00000003156, 2.68545956575, 1596.43025976811],
    [0.00000004282, 3.08651511729, 269.31393096221],
    [0.00000003178, 4.19270974886, 1886.7985756338],
    [0.00000004407, 0.80883083873, 236.7462791421],
    [0.00000003698, 3.47042194825, 762.9806638531],
    [0.00000003368, 1.82330731917, 196.8681383651],
    [0.00000004221, 3.28486189404, 102.74589087111],
    [0.00000003725, 0.49946278623, 511.2879003464],
    [0.00000003791, 2.10793640929, 1147.7406683643],
    [0.00000003211, 3.96787240218, 151.81275218821],
    [0.00000003516, 2.35583623511, 470.2496097668],
    [0.00000003947, 5.23994783505, 757.04277301989],
    [0.0000000399, 5.62067401902, 908.0904428628],
    [0.00000003674, 4.30821160157, 631.7891623043],
    [0.00000003787, 2.03840839568, 798.14475407429],
    [0.00000004369, 0.24055897355, 10100.12709452239],
    [0.00000003536, 0.89255741356, 354.75416856289],
    [0.00000003391, 3.82986107065, 5908.92403967139],
    [0.00000003083, 2.91678290429, 829.0611768473],
    [0.00000004306, 2.93642388121, 503.1080796351],
    [0.00000003547, 5.90192172992, 38.8499338733],
    [0.00000003214, 4.30099996048, 660.851097481],
    [0.00000003069, 2.00421290803, 53.5671549694],
    [0.00000003103, 5.6815218503, 367.3537775043],
    [0.00000003753, 3.592205222, 486.8606938484],
    [0.00000003982, 0.5588828017, 614.5931228861],
    [0.00000003567, 3.1567566339, 473.2185551834],
    [0.00000003603, 0.0078181759, 10059.54637832979],
    [0.00000003339, 2.35934486509, 15.2553009053],
    [0.00000003342, 6.08494495859, 391.73279989249],
    [0.00000003638, 0.04048968434, 104.7728803006],
    [0.00000003557, 1.72046667887, 365.869304796],
    [0.00000003047, 5.68168716112, 75.2378643719],
    [0.00000003047, 2.13930792847, 74.81296772971],
    [0.00000003632, 3.48011331291, 2175.1423941975],
    [0.00000003727, 3.34969084744, 668.76779363389],
    [0.0000000311, 0.34401803032, 95.68722562449],
    [0.0000000311, 3.48561068391, 96.1748605915],
    [0.00000003034, 4.47612078147, 98.6561710411],
    [0.00000003292, 3.11428915982, 68.90870679129],
    [0.00000003166, 2.82060316319, 5.69407334969],
    [0.00000003043, 3.5824461508, 100.14064374939],
    [0.0000000315, 5.49037416472, 6532.9023114898],
    [0.00000003284, 5.45199159924, 138.8731889388],
    [0.00000003008, 2.34154854306, 287.83687652179],
    [0.00000003451, 0.04036306515, 1206.2199993907],
    [0.00000003235, 5.57049156467, 302.6546713544],
    [0.00000004224, 2.82331346733, 527.22646959241],
    [0.0000000299, 5.76827883617, 182.5234242845],
    [0.00000003383, 0.31703037326, 30.95448957981],
    [0.00000004137, 1.16119065208, 436.4032359151],
    [0.00000003071, 2.92150327875, 198.82818395289],
    [0.00000003076, 5.55405559047, 608.0008407471],
    [0.00000003557, 3.38304796517, 731.70054278519],
    [0.00000003557, 0.24145531158, 732.1881777522],
    [0.00000003552, 4.79010413998, 262.2003839614],
    [0.00000004135, 0.91386728119, 195.1566631207],
    [0.00000002951, 5.02001310379, 161.65586403411],
    [0.00000002963, 3.96521662641, 1044.1602591787],
    [0.00000003762, 2.1591398896, 751.3106328634],
    [0.00000003317, 3.52842835842, 29.55183087609],
    [0.00000003109, 0.17339598358, 1061.4257345661],
    [0.0000000293, 1.50492864538, 60.3106870822],
    [0.00000002938, 0.97094618212, 380.6347100019],
    [0.00000003292, 6.11698623962, 576.4052054941],
    [0.00000002939, 6.16225734191, 47.0297545846],
    [0.00000002922, 5.63523473331, 55.05162767771],
    [0.00000002922, 5.32735300987, 94.9992044239],
    [0.0000000319, 5.25237662753, 9839.133735891],
    [0.0000000411, 3.23168496449, 2885.946877656],
    [0.00000003635, 5.57293444136, 189.96703968541],
    [0.00000003962, 1.9044558931, 511.3515908212],
    [0.00000002907, 1.21878102451, 373.29166833749],
    [0.00000002911, 3.43639672306, 379.13319095109],
    [0.00000003057, 2.28069656246, 517.66524203681],
    [0.00000003748, 5.29789330458, 5985.19011094699],
    [0.0000000325, 2.04631272961, 385.8218413097],
    [0.0000000325, 5.18790538319, 386.3094762767],
    [0.00000003118, 1.63458065883, 404.7506078317],
    [0.00000003966, 2.44588344367, 243.599193712],
    [0.00000002935, 0.28535439087, 1190.5420625756],
    [0.00000003497, 1.71663983829, 3114.5393408061],
    [0.00000002871, 5.08352321445, 743.5493922012],
    [0.00000002948, 1.96337308764, 78338.73484077338],
    [0.00000003905, 2.74341746288, 669.93675215711],
    [0.00000002937, 5.00887540692, 590.4892871438],
    [0.00000004039, 1.43143454755, 25633.23759253039],
    [0.0000000359, 1.87097789478, 376.7025567388],
    [0.00000002945, 4.5952725113, 274.30986580831],
    [0.00000003853, 4.25262991282, 224.6916790494],
    [0.00000003805, 5.95512913152, 3117.50828622269],
    [0.00000002874, 3.66628534507, 89.3555759164],
    [0.0000000356, 1.32400783975, 748.3416874468],
    [0.00000002905, 1.68667534198, 872.66572021069],
    [0.00000003186, 1.4450752555, 53.87597151011],
    [0.00000003567, 0.42211414373, 403.378009708],
    [0.00000003734, 1.03461913269, 909.46304098649],
    [0.00000003317, 4.89578641117, 204.45725824539],
    [0.00000003185, 1.0871054011, 5982.22116553039],
    [0.00000002821, 1.40365542947, 116.781788411],
    [0.00000002821, 4.54524808306, 116.294153444],
    [0.00000002924, 0.75846929777, 143.9027536797],
    [0.00000003219, 5.30142553407, 76.82540294419],
    [0.00000002902, 4.45890194491, 102.5858321767],
    [0.00000002902, 0.22050049109, 47.46499992491],
    [0.00000003255, 5.74825712501, 482.61302640021],
    [0.00000002994, 5.12441523239, 162.3920693445],
    [0.00000003717, 0.23818776188, 6061.4561822226],
    [0.00000003942, 1.61239965392, 6096.6202724438],
    [0.00000003586, 1.4643440968, 983.3596763971],
    [0.00000002803, 1.5623127265, 644.0732570606],
    [0.00000002802, 0.40865678955, 1592.2856581839],
    [0.00000003498, 4.37296414373, 232.2928610172],
    [0.00000003387, 6.19927452252, 25861.83005568049],
    [0.00000003049, 4.51772783361, 6529.93336607319],
    [0.0000000291, 2.86684983161, 355.99256305531],
    [0.00000003266, 0.17501993824, 265.48484356309],
    [0.00000003868, 0.77123558868, 2124.73981801839],
    [0.00000003667, 3.65486471998, 415.90818268021],
    [0.00000002825, 0.5345830788, 294.3172840762],
    [0.00000002775, 2.7619907422, 552.02618310591],
    [0.00000003099, 4.33492138442, 436.50630177909],
    [0.00000002858, 2.0903705125, 529.88659846831],
    [0.000000037, 4.15420608664, 25864.79900109709],
    [0.00000002855, 5.39205642374, 529.9829666879],
    [0.00000002805, 3.60457168165, 2089.0519708079],
    [0.00000002766, 0.96760939061, 1600.3624130312],
    [0.00000003634, 1.43359949431, 77.8824868828],
    [0.00000003634, 0.1042102881, 72.16834521881],
    [0.00000002849, 2.43470556852, 323.48860171],
    [0.00000002774, 5.37593250032, 1606.0945531877],
    [0.00000002788, 0.35923619267, 187.0317241636],
    [0.00000002971, 4.67124649084, 586.13318938849],
    [0.00000002901, 3.95305253167, 62.5288729734],
    [0.00000003856, 4.23035221531, 113.2133334428],
    [0.00000002957, 2.32108601739, 53.82778740031],
    [0.00000002741, 0.1020819732, 274.3434957031],
    [0.00000002895, 0.5099041909, 151.6070015115],
    [0.00000002827, 2.92280651892, 979.21507481291],
    [0.00000003178, 0.90273597947, 529.6741501472],
    [0.00000003613, 0.3491409891, 583.65187893891],
    [0.00000003096, 0.25244426036, 530.195415009],
    [0.0000000363, 1.66641450382, 9991.66587844219],
    [0.00000002778, 3.05604055978, 465.02992575149],
    [0.00000002899, 4.18012528286, 428.32648106781],
    [0.00000002977, 4.24176871345, 74.3777223894],
    [0.00000003543, 1.80484832429, 764.6775848825],
    [0.00000002975, 2.63804412296, 224.42855449101],
    [0.00000003288, 2.22514165222, 201.0463698441],
    [0.00000003824, 5.5096341557, 826.9290104776],
    [0.00000003019, 5.25002429145, 829.1642427113],
    [0.0000000278, 0.89847082818, 64.45528866639],
    [0.00000003345, 5.42351008501, 170.46882419179],
    [0.00000003345, 5.42351008501, 170.95645915881],
    [0.000000035, 0.43652930557, 9915.39980716659],
    [0.00000003048, 1.32379750445, 409.8920471572],
    [0.00000002854, 4.81337886926, 112.2501255963],
    [0.00000002775, 6.07066333426, 395.34943897051],
    [0.00000002715, 4.37307075717, 1533.4975106168],
    [0.00000002941, 6.118246767, 148.11009358871],
    [0.00000002946, 0.37007486704, 430.7741616226],
    [0.00000003426, 0.17468746696, 914.7284169841],
    [0.00000003161, 4.04783639199, 554.4256795509],
    [0.00000002968, 2.94519329004, 1542.09553032591],
    [0.00000003071, 5.84592008895, 1062.80714141041],
    [0.00000002999, 3.40007090655, 132.823423521],
    [0.00000003514, 1.73252446796, 6355.1323206256],
    [0.00000002745, 3.12838183717, 482.0135168486],
    [0.0000000285, 5.11696140522, 395.6649531556],
    [0.00000002663, 2.78626662149, 96.48367713221],
    [0.00000003, 1.57450492122, 519.8522901607],
    [0.00000002655, 2.76109188739, 1160.58635552159],
    [0.00000003001, 2.18803399036, 253.81481257341],
    [0.00000002983, 2.51014988868, 9912.43086174999],
    [0.00000002641, 3.23932215146, 487.3965129252],
    [0.00000003712, 3.03500052569, 10026.82996866339],
    [0.00000003062, 2.34062617235, 789.7043009321],
    [0.00000003147, 2.79398254369, 394.7017453091],
    [0.00000002712, 5.80476756645, 78.1611178062],
    [0.00000002692, 3.19752932766, 161.16822906709],
    [0.00000003303, 0.22748739897, 7.9480653153],
    [0.00000002747, 4.38283979645, 1372.4009782513],
    [0.00000003011, 0.65384486578, 1605.8314286293],
    [0.00000002807, 4.16656584606, 208.1262869501],
    [0.00000002631, 4.42161511005, 271.6497369324],
    [0.00000003688, 1.09167134977, 26543.05632558499],
    [0.00000003416, 5.17742066298, 331.07772159029],
    [0.00000002951, 1.21275667976, 12564.91104475801],
    [0.00000002727, 5.15144703991, 1064.0791657976],
    [0.00000002902, 4.64267920679, 1540.87418217599],
    [0.00000002728, 3.02052878065, 109.5563668256],
    [0.00000002999, 1.06420381994, 219.275053078],
    [0.00000002764, 2.64750487696, 142.20583265029],
    [0.00000002586, 3.6490508708, 959.8174330558],
    [0.00000002719, 5.16300330262, 52325.61329776649],
    [0.00000003042, 4.27530437715, 752.7951055717],
    [0.00000003089, 2.35849730561, 93.28772917949],
    [0.00000003647, 0.50719381004, 697.5633508853],
    [0.00000003492, 4.34377581989, 580.9135053732],
    [0.00000003597, 4.95426722828, 132.2809067998],
    [0.00000002974, 5.48085946209, 444.5830566264],
    [0.00000002572, 1.10174431945, 2117.5232051536],
    [0.00000002572, 4.16924943967, 23.33205575259],
    [0.00000003167, 2.20892124981, 12567.8799901746],
    [0.00000003382, 3.15537208847, 10285.3420168452],
    [0.00000002555, 5.91884582039, 678.11657286839],
    [0.000000033, 3.72323989169, 440.6509033633],
    [0.00000002831, 2.72460046701, 540.01727499551],
    [0.00000003189, 2.12670165168, 769.86363900301],
    [0.0000000319, 3.97099477941, 2424.3538472546],
    [0.0000000328, 1.96587920993, 86.3866304998],
    [0.0000000278, 2.14794520908, 1586.34776735071],
    [0.00000002594, 0.18719015167, 1373.88545095959],
    [0.00000002782, 5.73984608, 1268.9926898476],
    [0.0000000301, 5.61450100119, 1543.8431275926],
    [0.00000003022, 2.75503960638, 181.2995840071],
    [0.00000003022, 2.75503960638, 180.81194904009],
    [0.00000002833, 0.53805108835, 555.7982776746],
    [0.00000003293, 4.9727520391, 463.490571289],
    [0.00000003316, 0.94183619384, 807.9966746408],
    [0.000000033, 2.3084010392, 649.80539721709],
    [0.00000002983, 1.81721249094, 936.4016185141],
    [0.00000002865, 0.19981322997, 2192.40786958489],
    [0.00000003356, 0.40284796347, 247.5862287293],
    [0.00000002506, 0.59305762652, 40.8581635709],
    [0.00000003114, 3.54141009377, 1553.8919901152],
    [0.00000003268, 4.76214402026, 737.66849419841],
    [0.000000031, 2.50710858069, 657.66721161581],
    [0.0000000251, 3.00502356004, 20278.24855051219],
    [0.00000002833, 4.70043916327, 539.8115243188],
    [0.00000002554, 0.54563041227, 826.1952972947],
    [0.00000002806, 4.14737433673, 351.9485352076],
    [0.00000002633, 2.39197384134, 1448.6670495269],
    [0.00000002482, 3.92431211413, 1159.1018828133],
    [0.00000003088, 2.0698574322, 245.7862418359],
    [0.00000003458, 3.00992932151, 809.4811473491],
    [0.00000003385, 5.68731744934, 1056.444353935],
    [0.0000000305, 0.67258736204, 52174.56562792359],
    [0.00000002571, 3.71059042018, 584.5850262054],
    [0.00000002506, 1.51980608116, 381.88968804659],
    [0.00000002718, 0.91305266395, 352.17228437681],
    [0.00000003112, 3.60340669115, 481.1285536919],
    [0.00000002427, 2.03240412489, 20275.27960509559],
    [0.0000000266, 4.6853615809, 587.553971622],
    [0.00000003031, 4.22810484249, 106.62105130379],
    [0.00000002876, 5.82406245556, 837.76226242039],
    [0.00000002876, 2.68246980196, 838.2498973874],
    [0.00000002493, 3.29469616302, 339.53023682],
    [0.00000003071, 1.37054633718, 264.7486382527],
    [0.00000002956, 5.9309034487, 561.64229241569],
    [0.00000002956, 2.78931079511, 562.12992738271],
    [0.00000002675, 0.11376507333, 257.6687211467],
    [0.00000002412, 1.78724601033, 537.15139544289],
    [0.00000002425, 1.27553210878, 243.6540754662],
    [0.00000003094, 5.60755227933, 911.7594715675],
    [0.00000002916, 0.94105407657, 627.1232958583],
    [0.00000002461, 2.33753824934, 672.69994689699],
    [0.00000003109, 4.52636545098, 45.277951801],
    [0.00000003239, 2.55766569454, 412.33972771199],
    [0.0000000293, 6.24282243242, 173.38288785421],
    [0.00000002377, 3.93847902994, 1927.9554384424],
    [0.00000002783, 3.7467995707, 888.9679877516],
    [0.00000002572, 4.97882149879, 1536.46645603341],
    [0.00000002447, 3.55705970755, 1327.57508673799],
    [0.00000002533, 4.52831931294, 1330.5440321546],
    [0.00000002951, 1.23845421338, 328.5964111407],
    [0.00000002474, 1.24533740369, 1407.51018671831],
    [0.00000002518, 5.39696631071, 175.57663362249],
    [0.00000002678, 2.58260670513, 180.40581212981],
    [0.00000003251, 0.33431351861, 83.4109874388],
    [0.00000002327, 2.23207080538, 325.5492210343],
    [0.00000002802, 1.73977371146, 121.81135315189],
    [0.00000002675, 3.92263515595, 105.6242135625],
    [0.00000002909, 5.49280329616, 651.1868040614],
    [0.00000002358, 2.87531802084, 377.8782129064],
    [0.0000000278, 2.31107301213, 291.2934569054],
    [0.00000002876, 4.06630905979, 6813.0106325695],
    [0.00000002523, 4.12709915871, 440.9115357942],
    [0.00000003239, 4.67199575771, 724.84762821529],
    [0.00000002532, 0.78821708791, 39.34006096781],
    [0.00000002503, 5.06436722887, 360.3039209783],
    [0.00000002568, 1.92793293351, 1699.5230339867],
    [0.0000000257, 0.58090295304, 299.47327761669],
    [0.00000003223, 5.76095108778, 442.3960085025],
    [0.00000002316, 1.18843210875, 714.92270236481],
    [0.00000002457, 5.86455646124, 552.829332258],
    [0.00000002319, 2.34143811502, 290.12449838219],
    [0.00000002922, 2.46474269442, 1600.2023543368],
    [0.00000002297, 3.45720493767, 1811.52934209949],
    [0.00000002674, 5.89642910933, 519.26158932971],
    [0.00000002585, 5.75658839358, 754.27957828001],
    [0.00000002277, 1.29593099122, 386.10372559999],
    [0.00000002326, 4.96863117046, 172.80463016199],
    [0.00000003163, 3.75842207356, 476.18750059999],
    [0.00000003127, 1.03528434148, 652.9867909548],
    [0.00000003015, 6.17163510089, 3190.80541208169],
    [0.00000003015, 3.0300424473, 3191.29304704871],
    [0.00000002772, 5.78976016729, 431.08967580769],
    [0.00000002329, 6.09581509908, 759.0148806952],
    [0.00000002334, 4.33637332299, 837.97471074149],
    [0.00000002991, 2.07030361268, 458.810150628],
    [0.00000003166, 3.17988758658, 26161.44408491669],
    [0.00000002566, 5.96622982807, 63.23144838899],
    [0.00000002282, 0.94732597842, 811.2174437677],
    [0.00000002423, 5.49223138244, 103.109589166],
    [0.00000003125, 6.04955881702, 939.37056393069],
    [0.00000002277, 5.51962275937, 0.27744737829],
    [0.00000002982, 2.21130422996, 37.8555882595],
    [0.00000002982, 5.35289688355, 37.3679532925],
    [0.00000002437, 5.09941116678, 377.12075573661],
    [0.00000002672, 1.2974200097, 412.07909528109],
    [0.00000002289, 5.75046347059, 1258.6977491091],
    [0.00000002259, 3.10987273961, 113.6315324406],
    [0.00000003098, 3.32366686883, 612.4206289772],
    [0.00000003098, 3.32366686883, 611.9329940102],
    [0.00000003157, 2.89245113423, 3795.7656107106],
    [0.00000002795, 5.48481257493, 10743.2203287891],
    [0.00000002777, 3.1856679861, 211.09523236671],
    [0.00000003088, 4.00968174537, 230.52650401861],
    [0.0000000294, 1.94569042371, 714.6620699339],
    [0.00000002685, 1.40856509045, 303.82362987761],
    [0.0000000226, 3.38291888798, 124.2041519525],
    [0.00000003092, 4.98095101091, 3414.1533700423],
    [0.00000003015, 0.01212812855, 342.4991822366],
    [0.00000003083, 2.29263489637, 206.9506307825],
    [0.00000003083, 2.29263489637, 206.4629958155],
    [0.00000002331, 0.84374458161, 820.5662230022],
    [0.00000002712, 2.90887297124, 770.306659175],
    [0.00000002587, 4.1411476579, 636.2089505344],
    [0.00000002587, 4.1411476579, 635.72131556739],
    [0.00000002803, 4.34014546433, 25938.09612695609],
    [0.00000002803, 1.19855281074, 25938.5837619231],
    [0.00000002405, 0.34118525545, 488.6057989876],
    [0.00000002359, 4.55464439275, 87.067954056],
    [0.0000000216, 2.34244688851, 199.528267241],
    [0.00000002362, 0.79682610358, 1222.0346319646],
    [0.00000002362, 3.93841875717, 1222.52226693161],
    [0.0000000274, 5.56893792908, 627.61093082531],
    [0.00000002798, 0.78287898333, 771.3481117113],
    [0.00000002798, 0.78287898333, 770.8604767443],
    [0.00000002435, 3.93525838301, 350.08830211689],
    [0.00000002357, 6.1808096595, 355.2418035299],
    [0.00000002485, 5.35449462342, 142.41828097139],
    [0.00000002521, 2.60576764189, 129.6756596781],
    [0.00000002089, 0.73778136703, 74.5859651936],
    [0.00000002302, 4.80810165693, 52177.04693837319],
    [0.00000002302, 1.66650900334, 52177.53457334019],
    [0.00000002619, 3.19212100623, 1321.6828878871],
    [0.00000002572, 4.73607789846, 659.43031524749],
    [0.00000002225, 6.24656870358, 59.526297662],
    [0.00000002835, 1.73395299243, 59.34747923569],
    [0.00000002282, 0.93137400045, 295.9136313691],
    [0.00000001992, 1.74985561339, 765.64079272899],
    [0.00000001992, 1.74985561339, 766.128427696],
    [0.00000002574, 4.89834107176, 192.5602247196],
    [0.00000002264, 5.6446805299, 75.0590459456],
    [0.00000002089, 4.42711005532, 74.489596974],
    [0.00000002032, 3.4035103524, 215.6817769356],
    [0.00000001982, 5.16439207994, 898.5292153072],
    [0.00000001982, 5.16439207994, 899.0168502742],
    [0.00000002374, 0.01113742145, 550.9690991673],
    [0.00000002374, 3.15273007504, 551.45673413431],
    [0.00000002352, 4.77946960216, 24.36220744081],
    [0.00000002591, 5.32795008432, 367.72628451979],
    [0.0000000223, 6.23634089876, 329.9690092644],
    [0.0000000261, 4.30928957119, 66.1522096958],
    [0.0000000261, 1.1676969176, 66.63984466281],
    [0.00000001942, 0.75979107585, 74.6978397782],
    [0.00000002217, 4.28506837956, 353.0572475335],
    [0.00000002034, 2.87672963893, 527.9626749028],
    [0.00000002034, 6.01832229252, 528.4503098698],
    [0.00000002025, 3.47385821354, 94.9846502089],
    [0.0000000222, 1.63487182927, 160.365079915],
    [0.00000002205, 3.89758784429, 460.7822583033],
    [0.00000002205, 0.75599519071, 460.2946233363],
    [0.00000001903, 0.55549926481, 170.51700830159],
    [0.00000001903, 3.6970919184, 171.0046432686],
    [0.0000000188, 1.20742771402, 845.8390172677],
    [0.00000001879, 3.10039964385, 810.41429461559],
    [0.00000001918, 5.86821877824, 980.4243608753],
    [0.00000001918, 5.86821877824, 980.91199584231],
    [0.00000002012, 6.16028051115, 482.9767246951],
    [0.00000002408, 2.08338219083, 673.5600888795],
    [0.00000002408, 5.22497484442, 673.0724539125],
    [0.00000001917, 6.07962338817, 464.2267765994],
    [0.00000001917, 2.93803073458, 464.7144115664],
    [0.00000002523, 5.39756661705, 207.1173871213],
    [0.00000002235, 3.16893594529, 156.2874221725],
    [0.00000001889, 1.49538325556, 96.6291816116],
    [0.00000002163, 6.02567448655, 1325.1274061832],
    [0.00000002163, 6.02567448655, 1325.6150411502],
    [0.00000002041, 3.14152073195, 753.3858064027],
    [0.00000002385, 2.09028108448, 589.1021348051],
    [0.00000002385, 2.09028108448, 589.5897697721],
    [0.0000000232, 6.09175102857, 153.772797776],
    [0.00000001825, 5.92052919225, 241.62708603669],
    [0.00000001938, 1.19271280652, 989.98558843089],
    [0.00000001938, 4.33430546011, 990.47322339791],
    [0.00000001801, 3.16549584218, 386.4762326155],
    [0.00000001801, 0.02390318859, 386.96386758251],
    [0.0000000187, 5.04637132802, 814.0833233203],
    [0.0000000187, 1.90477867443, 813.5956883533],
    [0.0000000182, 1.38338010829, 194.42045781031],
    [0.00000002331, 5.06651614946, 229.2087876491],
    [0.00000001846, 3.96765232448, 1310.6371876232],
    [0.00000001813, 5.03930311956, 242.85092631409],
    [0.00000001813, 5.03930311956, 243.3385612811],
    [0.00000002125, 2.47782176621, 927.73416283579],
    [0.00000001841, 2.32220678128, 114.1552894299],
    [0.0000000177, 1.07929229507, 113.89465699899],
    [0.00000001797, 3.39032778968, 286.3524038135],
    [0.00000002348, 5.43827517653, 838.4623457085],
    [0.00000002341, 2.42376209355, 80.475671917],
    [0.00000002214, 0.68034717267, 355.50492808829],
    [0.00000001986, 1.15722169964, 180.5513166092],
    [0.00000001742, 4.55052960802, 380.37158544351],
    [0.00000001858, 0.90088013499, 1471.50920958009],
    [0.00000001858, 4.04247278858, 1471.9968445471],
    [0.00000001883, 1.87812922018, 102.7671427305],
    [0.00000002209, 6.09138093441, 658.40341692619],
    [0.00000002209, 6.09138093441, 658.8910518932],
    [0.00000001942, 3.82543532079, 703.38936713389],
    [0.00000001915, 5.01403168451, 423.17297965479],
    [0.00000001915, 1.87243903092, 423.66061462181],
    [0.00000002166, 4.80147535867, 79.53371592989],
    [0.00000001755, 3.84345466047, 152.50077338879],
    [0.000000017, 0.11878614099, 50.15875869559],
    [0.00000002051, 4.57025334031, 807.9666140608],
    [0.00000002051, 1.42866068672, 808.4542490278],
    [0.00000001839, 4.186777237, 756.56720014041],
    [0.00000001682, 5.63413232593, 1049.5768851501],
    [0.00000001682, 5.63413232593, 1050.0645201171],
    [0.00000001706, 0.05840133316, 832.34563644899],
    [0.00000001706, 3.19999398675, 832.833271416],
    [0.00000001776, 5.33275323151, 1384.93115122349],
    [0.00000001776, 5.33275323151, 1385.4187861905],
    [0.00000001811, 6.22065088973, 454.55367445919],
    [0.00000001811, 3.07905823614, 455.0413094262],
    [0.00000001692, 0.01726995267, 271.16210196539],
    [0.00000002206, 1.46100694835, 132.33578855399],
    [0.00000001658, 1.87948596313, 184.3379653929],
    [0.00000001875, 0.56092257594, 1282.58913653029],
    [0.00000001875, 0.56092257594, 1283.0767714973],
    [0.00000001686, 2.02094532949, 406.71065341949],
    [0.00000001686, 5.16253798308, 407.1982883865],
    [0.00000002083, 2.68520521916, 119.638859243],
    [0.0000000224, 5.47514142442, 404.3748474493],
    [0.00000001952, 4.95402575397, 458.33457774851],
    [0.00000001952, 1.81243310038, 457.8469427815],
    [0.00000002288, 0.8005555938, 135.3047339706],
    [0.00000001949, 4.83910213339, 1056.1691672891],
    [0.00000001949, 4.83910213339, 1056.6568022561],
    [0.00000001974, 3.45809672503, 269.93826168799],
    [0.00000001974, 3.45809672503, 270.42589665501],
    [0.00000001659, 0.74121494237, 1450.3115809296],
    [0.00000001659, 3.88280759596, 1450.79921589661],
    [0.00000002309, 2.28366049597, 74.7984135147],
    [0.00000001644, 5.02792890637, 321.5164940347],
    [0.00000001644, 5.02792890637, 322.00412900171],
    [0.00000001656, 2.46567744969, 516.9169746389],
    [0.00000001656, 5.60727010328, 517.4046096059],
    [0.00000002034, 5.9889866326, 274.87931477991],
    [0.00000002034, 2.84739397901, 274.39167981289],
    [0.00000002154, 1.72886095548, 516.2926439131],
    [0.00000002154, 1.72886095548, 515.8050089461],
    [0.00000001711, 3.10813260274, 885.99904233499],
    [0.00000001711, 6.24972525633, 886.48667730201],
    [0.00000001826, 4.02049514986, 398.4369566161],
    [0.00000001826, 0.87890249627, 398.9245915831],
    [0.00000001966, 5.67503368913, 15.9096922111],
    [0.00000001966, 5.67503368913, 16.3973271781],
    [0.00000001678, 5.2659905955, 1182.67775604939],
    [0.00000001678, 5.2659905955, 1183.16539101641],
    [0.00000002098, 0.13935063439, 630.09224127489],
    [0.00000002098, 0.13935063439, 630.5798762419],
    [0.00000002239, 0.96016185025, 446.5551643017],
    [0.00000002239, 4.10175450384, 446.06752933469],
    [0.00000001889, 2.64943395349, 86.69544704049],
    [0.00000001889, 5.79102660707, 87.18308200751],
    [0.00000001759, 1.85756489257, 614.1175500066],
    [0.00000001759, 1.85756489257, 613.6299150396],
    [0.00000001673, 1.68162249326, 231.06902073981],
    [0.00000001607, 1.04950977043, 412.12727939089],
    [0.00000001607, 1.04950977043, 412.6149143579],
    [0.0000000207, 2.25718168745, 824.23525170691],
    [0.00000001835, 5.529707119, 146.87169909629],
    [0.0000000158, 0.04314663008, 2002.73703700969],
    [0.0000000158, 0.04314663008, 2003.2246719767],
    [0.00000001979, 1.17491481301, 407.23191828129],
    [0.00000001979, 4.3165074666, 407.71955324831],
    [0.00000001764, 3.81236252275, 544.7525774107],
    [0.00000001815, 3.6812222711, 174.9222423167],
    [0.00000001808, 2.97279980018, 454.7774236284],
    [0.00000001808, 6.11439245377, 455.2650585954],
    [0.00000001667, 5.87424656754, 409.6795988361],
    [0.00000001667, 5.87424656754, 410.1672338031],
    [0.00000001739, 1.7855158859, 271.4227343963],
    [0.00000001739, 4.92710853949, 271.9103693633],
    [0.00000001764, 4.44257226642, 625.42637482889],
    [0.00000001764, 4.44257226642, 625.9140097959],
    [0.00000001578, 1.06601243126, 1321.19525292009],
    [0.00000002105, 1.19642147071, 348.1282565291],
    [0.00000001602, 5.65877015739, 1133.91971127299],
    [0.00000001602, 5.65877015738, 1134.40734624],
    [0.0000000169, 5.41519122123, 2.24955505361],
    [0.0000000169, 2.27359856764, 1.7619200866],
    [0.00000001611, 4.78503604384, 1442.2348260823],
    [0.00000001611, 1.64344339025, 1442.7224610493],
    [0.00000001553, 1.99292461065, 550.8572245827],
    [0.00000001553, 5.13451726423, 551.3448595497],
    [0.00000001801, 1.8739840166, 450.4727633498],
    [0.00000001801, 1.87398401659, 450.96039831681],
    [0.00000002, 2.6605792636, 239.1457755871],
    [0.00000002, 5.80217191719, 238.6581406201],
    [0.0000000161, 4.21223376244, 1274.7248300041],
    [0.0000000161, 1.07064110885, 1275.2124649711],
    [0.00000001669, 4.52228317651, 839.2467351287],
    [0.00000001669, 1.38069052292, 839.73437009571],
    [0.00000001618, 3.36105446751, 376.9150050599],
    [0.00000001618, 0.21946181392, 377.4026400269],
    [0.00000001986, 0.62147303592, 980.3907309805],
    [0.00000001986, 0.62147303592, 979.90309601349],
    [0.00000001523, 1.37959889046, 67.94549894479],
    [0.00000001625, 2.0598684347, 72.94143379089],
    [0.00000001699, 4.63549638138, 418.2776185452],
    [0.00000001699, 1.49390372779, 418.76525351221],
    [0.00000001699, 0.14199812582, 991.4700611392],
    [0.00000001699, 3.28359077941, 991.9576961062],
    [0.0000000214, 6.17088765144, 468.8926430454],
    [0.0000000214, 6.17088765144, 469.38027801241],
    [0.00000001943, 5.41638718025, 55.52720055719],
    [0.00000001887, 2.96965661566, 250.9276811614],
    [0.00000001887, 6.11124926925, 251.4153161284],
    [0.000000015, 3.6208363781, 63.6039554045],
    [0.00000001595, 1.27948001449, 440.1753304838],
    [0.00000001595, 4.42107266808, 439.6876955168],
    [0.00000001499, 2.15375666291, 309.0345051723],
    [0.00000001499, 2.15375666291, 309.5221401393],
    [0.00000001554, 3.36297518119, 759.04851059],
    [0.00000001554, 3.36297518119, 759.536145557],
    [0.00000001834, 4.6422292178, 1.4531035459],
    [0.00000001834, 1.50063656421, 1.9407385129],
    [0.00000002054, 4.1350856042, 549.972261426],
    [0.00000002054, 4.1350856042, 549.48462645899],
    [0.00000001488, 4.40870494577, 1095.3659845099],
    [0.00000001488, 4.40870494577, 1095.85361947691],
    [0.00000001484, 2.39819072564, 68.1243173711],
    [0.00000001818, 0.16664442254, 587.6176620968],
    [0.00000001818, 3.30823707613, 588.10529706381],
    [0.00000001714, 2.03603945431, 245.03548231051],
    [0.00000001714, 2.03603945431, 244.54784734349],
    [0.0000000192, 0.93463073151, 675.0445615878],
    [0.0000000192, 4.0762233851, 674.5569266208],
    [0.00000001504, 5.74149452616, 833.7964792625],
    [0.00000002044, 5.51343159668, 6662.95980046789],
    [0.00000002044, 5.51343159668, 6663.4474354349],
    [0.00000001648, 1.91165234067, 438.5420999292],
    [0.00000001466, 4.9697070249, 304.36614659881],
    [0.00000001472, 3.31043387588, 1257.4593546167],
    [0.00000001472, 3.31043387588, 1257.9469895837],
    [0.00000001615, 0.76736560614, 984.35651413839],
    [0.00000001625, 5.0792038947, 949.1924239172],
    [0.00000001625, 1.93761124111, 949.6800588842],
    [0.00000001715, 6.06338805381, 349.6127292374],
    [0.00000001931, 0.83387866179, 1819.8812835927],
    [0.0000000145, 2.21466410541, 493.7593004006],
    [0.0000000145, 2.21466410541, 493.2716654336],
    [0.00000001436, 4.3522736499, 430.02340209721],
    [0.00000001436, 4.3522736499, 429.5357671302],
    [0.00000001945, 6.20261907757, 131.68139724819],
    [0.00000001431, 6.07196110025, 157.39613449839],
    [0.00000001662, 0.09098469501, 6209.53490664889],
    [0.00000001662, 3.2325773486, 6210.0225416159],
    [0.00000001819, 5.0799845103, 1008.73553652659],
    [0.00000001819, 1.93839185671, 1009.22317149361],
    [0.00000001518, 2.72434442822, 328.6782251453],
    [0.00000001518, 2.72434442822, 329.1658601123],
    [0.00000001638, 3.00636571119, 519.88592005549],
    [0.00000001638, 3.00636571119, 520.37355502251],
    [0.0000000168, 6.03882975885, 359.6495296725],
    [0.0000000168, 2.89723710526, 360.1371646395],
    [0.00000001843, 5.67893032773, 478.15960827531],
    [0.00000001843, 5.67893032773, 477.6719733083],
    [0.00000001489, 3.54216170755, 400.49087829599],
    [0.00000001489, 0.40056905396, 400.97851326301],
    [0.00000001752, 0.1680484404, 6271.78633224399],
    [0.00000001752, 0.1680484404, 6272.273967211],
    [0.00000001895, 2.99891680203, 1055.1723295478],
    [0.00000001895, 2.99891680203, 1054.6846945808],
    [0.00000001717, 5.16735204147, 536.5606946119],
    [0.00000001758, 5.73369868016, 1095.0504703248],
    [0.00000001758, 5.73369868016, 1094.5628353578],
    [0.00000001721, 5.73061288107, 104.33342944339],
    [0.00000001713, 6.0436511242, 621.4942215658],
    [0.0000000146, 1.87863990334, 341.1265841129],
    [0.0000000146, 1.87863990334, 340.63894914589],
    [0.0000000178, 3.52262570474, 1668.8336137498],
    [0.0000000178, 0.38103305115, 1668.3459787828],
    [0.00000001401, 3.66161518331, 451.48415530609],
    [0.00000001401, 0.52002252972, 451.97179027311],
    [0.00000001394, 2.79876022404, 252.4121538697],
    [0.00000001942, 0.65443948228, 10593.16949668749],
    [0.00000001942, 0.65443948228, 10593.6571316545],
    [0.00000001427, 3.71549072767, 228.21194990781],
    [0.00000001427, 3.71549072767, 227.72431494079],
    [0.00000001395, 1.68241228451, 697.76029284139],
    [0.00000001395, 1.68241228451, 698.2479278084],
    [0.00000001403, 4.02233962356, 281.24459438279],
    [0.00000001403, 4.02233962356, 281.7322293498],
    [0.00000001507, 4.90762022605, 193.8991929485],
    [0.00000001401, 3.75133437627, 47.4504457099],
    [0.00000001458, 1.3016400258, 214.19730422731],
    [0.00000001408, 4.84929178616, 105.76971804189],
    [0.00000001545, 4.93926208865, 912.5438609877],
    [0.00000001545, 1.79766943506, 913.03149595471],
    [0.0000000178, 5.55379390271, 623.1911425952],
    [0.0000000178, 5.55379390271, 623.6787775622],
    [0.00000001421, 0.28471608319, 1349.5064285714],
    [0.00000001421, 3.42630873678, 1349.9940635384],
    [0.00000001421, 3.58407040366, 1447.18257681859],
    [0.00000001421, 3.58407040366, 1447.6702117856],
];

const Y1: &[Term] = &[
    [0.0222511375, 0.23889049392, 0.2438174835],
    [0.00738897387, 4.43927593626, 149.8070146181],
    [0.00239408407, 3.76717540218, 73.5409433425],
    [0.00229359688, 0.91052914986, 76.50988875911],
    [0.0011058356, 4.00448071218, 11.2895177474],
    [0.00095657865, 5.06686614467, 63.9797157869],
    [0.00081488096, 5.92277112536, 86.07111631471],
    [0.00045577241, 0.72706305435, 138.76131435421],
    [0.00051354528, 0.61825536711, 224.5886131854],
    [0.00038568, 5.01914859027, 71.09326278771],
    [0.00037681305, 4.78820636032, 75.0254160508],
    [0.00041920157, 5.73652625878, 74.53778108379],
    [0.00036154364, 5.94864908914, 78.9575693139],
    [0.00021671035, 3.36593709546, 151.2914873264],
    [0.00019425371, 6.01825386971, 77.9943614674],
    [0.0001737717, 4.95887394628, 72.05647063421],
    [0.00015101686, 3.96616276, 4.1759707466],
    [0.00007734175, 0.0426327667, 71.8440223131],
    [0.00007431784, 4.63221839509, 78.2068097885],
    [0.00006987545, 0.83638484964, 145.874861355],
    [0.00007298813, 0.66426542553, 3.21276290011],
    [0.00007589358, 1.19697295521, 148.32254190981],
    [0.0000437758, 2.17199709718, 160.852714882],
    [0.00003947976, 3.17415954213, 65.46418849521],
    [0.00004122455, 6.19822707406, 22.3352180113],
    [0.00002797759, 3.33611153878, 213.5429129215],
    [0.00002617647, 1.79307323508, 9.8050450391],
    [0.00002637599, 2.9709500482, 12.77399045571],
    [0.00003175281, 3.08123141539, 299.37021175271],
    [0.0000224528, 5.07246912294, 52.446380556],
    [0.00002227953, 4.89367152704, 87.555589023],
    [0.00002822936, 1.83097011748, 84.5866436064],
    [0.00002517942, 1.26953424709, 18.40306474821],
    [0.00002220819, 3.21400436294, 72.577735496],
    [0.00001622656, 2.18707111524, 153.73916788121],
    [0.00001925669, 0.82858902246, 39.86132582961],
    [0.00001555527, 2.56671995255, 74.0622082043],
    [0.00001901819, 4.78958433549, 127.71561409031],
    [0.00001598284, 4.7958664782, 79.47883417571],
    [0.00001476433, 2.10157835287, 75.98862389731],
    [0.00001532412, 2.14699190783, 152.77596003471],
    [0.00001440833, 0.60856377911, 127.22797912329],
    [0.00001745915, 1.67843758301, 77.4730966056],
    [0.00001713773, 1.82301190922, 223.1041404771],
    [0.00001706344, 5.82533914555, 226.07308589371],
    [0.00001357973, 6.18089361282, 70.5719979259],
    [0.00001738426, 3.82544050989, 146.8380692015],
    [0.00001467571, 5.10136854333, 2.9375762542],
    [0.00001179806, 3.56840380352, 220.6564599223],
    [0.00001236409, 5.69350914104, 4.6972356084],
    [0.00001067152, 6.09416202691, 62.4952430786],
    [0.00000977123, 5.73086540533, 74.91354146621],
    [0.00000977123, 5.23172233785, 75.1372906354],
    [0.00000937717, 1.52410870371, 56.8661687861],
    [0.00001087876, 3.42153780818, 131.6477673534],
    [0.00000890295, 2.70229070005, 426.8420083595],
    [0.00001040906, 3.84755403081, 110.189506272],
    [0.00000935342, 1.92101982937, 149.3193796511],
    [0.00000862611, 2.93877651502, 52.934015523],
    [0.00000777859, 1.4400131842, 63.49208081989],
    [0.00000746826, 3.21375563841, 93.1846633155],
    [0.00000747709, 4.36891744549, 206.42936592071],
    [0.000006482, 4.91583959018, 80.44204202221],
    [0.0000064035, 1.39049394918, 1.24065522479],
    [0.0000079475, 1.71892347867, 7.3573644843],
    [0.00000605254, 4.81788763333, 1059.6257476727],
    [0.00000615326, 0.13279791934, 10.8018827804],
    [0.00000569613, 6.19438038601, 73.0533083755],
    [0.00000665795, 1.92703769837, 97.11681657861],
    [0.00000575875, 0.85800317726, 522.8212355773],
    [0.00000563041, 0.34515637363, 537.0483295789],
    [0.00000493956, 1.93216860314, 137.2768416459],
    [0.00000477372, 5.87004905618, 41.3457985379],
    [0.00000445046, 2.08028645037, 2.69149803831],
    [0.00000441333, 5.78719554674, 67.91186905],
    [0.00000413028, 2.21824858776, 66.9486612035],
    [0.00000408718, 5.05109929565, 82.13896305161],
    [0.00000393354, 0.01753896463, 15.2216710105],
    [0.00000347208, 2.52660613312, 146.6256208804],
    [0.00000350848, 4.64021047834, 76.0222537921],
    [0.00000311934, 6.04641128519, 1.7282901918],
    [0.00000307527, 3.13299616747, 202.4972126576],
    [0.00000343437, 2.85099749738, 142.6934676173],
    [0.00000291412, 2.8471682767, 5.6604434549],
    [0.00000327071, 4.27135603462, 113.15845168861],
    [0.00000283053, 2.69361373135, 138.2736793872],
    [0.00000276688, 1.94716640065, 70.6056278207],
    [0.0000027965, 2.52443983499, 83.1021708981],
    [0.00000294524, 5.21442700405, 145.35359649321],
    [0.00000254666, 4.6834686026, 235.6343134493],
    [0.00000294078, 2.63162352478, 33.43580002939],
    [0.00000275813, 2.696921941, 56.3785338191],
    [0.0000025574, 2.28857138569, 265.745475994],
    [0.00000273184, 0.38956727235, 36.892380413],
    [0.0000024656, 3.74959440503, 159.36824217371],
    [0.00000235614, 2.06048819267, 20.850745303],
    [0.000002173, 2.68296221034, 152.9884083558],
    [0.00000233552, 5.10562451416, 108.70503356371],
    [0.00000209062, 3.07234563267, 140.2457870625],
    [0.00000229061, 4.38926682332, 194.89603068979],
    [0.00000197502, 0.42703110531, 190.9638774267],
    [0.00000194913, 3.89875917751, 209.12312469139],
    [0.00000192549, 5.17184042822, 23.81969071961],
    [0.00000228047, 4.16747124114, 297.8857390444],
    [0.00000167442, 1.30512782686, 134.3415261241],
    [0.00000169219, 5.32760035006, 59.55992755679],
    [0.00000182817, 4.71950113329, 134.8291610911],
    [0.00000154035, 5.62362511366, 288.32451148881],
    [0.00000165598, 4.46093635884, 6.1817083167],
    [0.00000153435, 1.12954247651, 162.3371875903],
    [0.0000019193, 5.54402688683, 374.15181032],
    [0.00000154136, 1.68406483408, 14.258463164],
    [0.00000152205, 2.69999688221, 120.1144321225],
    [0.00000179814, 2.4376742602, 60.04756252381],
    [0.00000143557, 4.23090875226, 212.05844021321],
    [0.00000141934, 6.02296068352, 69.6087900794],
    [0.00000140696, 3.78608728509, 29.44876501211],
    [0.00000140277, 3.58845867295, 80.963306884],
    [0.00000134345, 5.14541559038, 39.6006933987],
    [0.00000148026, 1.44796277531, 186.4555775476],
    [0.00000138037, 0.1662371592, 3.6883357796],
    [0.00000122748, 2.86265578538, 129.2000867986],
    [0.00000132977, 5.88158107492, 68.80564092731],
    [0.00000141987, 3.15548842991, 114.6429243969],
    [0.00000132318, 2.36034544105, 90.0032695778],
    [0.0000011601, 1.93581371352, 33.3809182752],
    [0.00000119775, 1.10226576648, 69.0875252176],
    [0.00000120027, 2.55359011727, 305.10235190919],
    [0.00000117279, 5.41876945206, 277.2788112249],
    [0.00000120086, 1.31242375861, 50.6463936626],
    [0.00000109599, 3.65947356465, 89.0400617313],
    [0.00000121041, 0.94635029675, 154.260432743],
    [0.00000118779, 5.08108465545, 81.2451911743],
    [0.0000010325, 2.14332472656, 144.39038864671],
    [0.00000118351, 2.99239145613, 41.4006802921],
    [0.00000116406, 4.85267098663, 116.18227885939],
    [0.00000136248, 1.0261410793, 45.3328335552],
    [0.00000104859, 1.08415262437, 54.41848823131],
    [0.00000096225, 6.02638036659, 50.9619078477],
    [0.00000116279, 4.59183961032, 227.557558602],
    [0.00000122913, 2.00108805237, 300.854684461],
    [0.00000093159, 5.79382600147, 110.45013870291],
    [0.00000102738, 3.77683090065, 152.2546951729],
    [0.00000086724, 0.10102936322, 7.83293736379],
    [0.00000081743, 4.69965325972, 228.5207664485],
    [0.00000084795, 4.63965252699, 42.83027124621],
    [0.00000075252, 1.65398168749, 2.20386307129],
    [0.00000074096, 4.96998649948, 148.84380677161],
    [0.00000074141, 4.55571799271, 150.7702224646],
    [0.00000080549, 3.37285893842, 99.40443843901],
    [0.00000073326, 1.94650353151, 640.1411037975],
    [0.00000081866, 3.90328813556, 31.9513273211],
    [0.00000073049, 1.65979346411, 9.3174100721],
    [0.00000074334, 3.16185820508, 8.32057233081],
    [0.00000073323, 3.78688502488, 95.6323438703],
    [0.00000069283, 0.88641793058, 120.6020670895],
    [0.00000067771, 4.95516064946, 16.9185920399],
    [0.00000071013, 3.42555712405, 24.1352049047],
    [0.00000075802, 3.00563101406, 36.404745446],
    [0.00000079127, 5.99063673101, 5.97595764],
    [0.0000007217, 3.97968852101, 404.2629728647],
    [0.00000067065, 3.27129691616, 28.81562556571],
    [0.00000072371, 0.35418537369, 230.3207533419],
    [0.00000086876, 3.24212615152, 419.72846135871],
    [0.00000062861, 0.14858922104, 202.0095776906],
    [0.00000070935, 1.10294734261, 183.486632131],
    [0.00000069304, 6.08426855707, 333.4135275605],
    [0.00000060612, 2.74156472861, 116.6699138264],
    [0.00000060708, 4.27659252807, 70.35954960481],
    [0.00000070577, 2.80558133688, 70.08436295889],
    [0.00000060413, 1.36799815983, 149.91888920271],
    [0.00000056872, 2.3605880301, 53.93085326429],
    [0.00000056665, 3.54220331724, 79.6912824968],
    [0.00000056672, 5.25529040442, 73.3284950214],
    [0.00000053385, 2.11007967538, 329.48137429739],
    [0.00000060881, 5.83277800264, 126.231141382],
    [0.0000005572, 2.56360473726, 76.72233708021],
    [0.00000055712, 4.81842861613, 157.8837694654],
    [0.00000060449, 5.61300042131, 347.6406215621],
    [0.00000051883, 5.93550310468, 147.3593340633],
    [0.00000053514, 2.91453252731, 433.9555553603],
    [0.00000049248, 1.51991875678, 68.4331339118],
    [0.00000048173, 2.90644675264, 128.7124518316],
    [0.00000057429, 0.1743694616, 19.8875374565],
    [0.00000045855, 0.26413680268, 8.10812400971],
    [0.00000045035, 5.61065437203, 6.86972951729],
    [0.00000045638, 2.94030988664, 415.3086731286],
    [0.00000043941, 2.65210291918, 75.77617557621],
    [0.00000043941, 2.02730403124, 74.2746565254],
    [0.00000052767, 2.76209553241, 147.83490694279],
    [0.00000040257, 1.13787399944, 155.2236405895],
    [0.00000042861, 0.04761592814, 107.2205608554],
    [0.00000039791, 4.36382280015, 258.6319289932],
    [0.00000039522, 6.00506578609, 98.91680347199],
    [0.00000039676, 4.00856971667, 276.79117625789],
    [0.0000004168, 3.13707624385, 272.85902299479],
    [0.00000049985, 1.44333404289, 125.743506415],
    [0.00000039779, 0.19499431864, 143.8691237849],
    [0.00000047193, 2.77004558406, 67.1611095246],
    [0.00000042716, 5.17138594591, 1589.3167127673],
    [0.00000036533, 3.11312786761, 81.61769818981],
    [0.00000046283, 2.14611986732, 62.0076081116],
    [0.00000036873, 0.60121789532, 46.71424039951],
    [0.00000035335, 3.24859872841, 135.7923689376],
    [0.0000003657, 5.69158157354, 167.9662618828],
    [0.00000033878, 0.99777389192, 14.47091148511],
    [0.00000033444, 2.15331669456, 149.6951400335],
    [0.00000040027, 0.3916008522, 187.9400502559],
    [0.00000033511, 1.05857849175, 61.01077037031],
    [0.00000037402, 4.92427573893, 259.7527034066],
    [0.00000034209, 1.81074999609, 529.9347825781],
    [0.00000031617, 4.39624200688, 224.1009782184],
    [0.0000004278, 6.01622236636, 58.3506414944],
    [0.00000030892, 0.16528925233, 1052.51220067191],
    [0.00000030724, 4.12747584944, 103.3365917021],
    [0.00000037429, 5.50521421633, 74.13164417351],
    [0.00000037429, 5.45737352685, 75.9191879281],
    [0.00000030708, 4.96119928476, 72.73779419041],
    [0.00000030708, 6.00138845842, 77.3130379112],
    [0.00000035364, 1.85148506912, 82.889722577],
    [0.00000028175, 5.61993541202, 295.4380584896],
    [0.00000029578, 0.77172005313, 1066.7392946735],
    [0.00000029606, 1.50195344116, 121.2352065359],
    [0.0000002877, 1.22525548779, 6.3484646555],
    [0.00000032637, 4.39471635403, 155.53915477459],
    [0.00000031706, 0.35163342435, 38.3768531213],
    [0.00000026723, 3.18108685366, 43.5328466618],
    [0.00000027442, 1.45908203944, 220.1351950605],
    [0.00000036094, 1.10822042269, 340.52707456129],
    [0.00000028308, 3.44249690833, 85.58348134769],
    [0.00000030388, 1.47086782147, 184.97110483931],
    [0.00000033909, 4.45538444508, 171.8984151459],
    [0.00000028512, 4.03769470105, 51.44954281471],
    [0.00000028765, 4.21609406946, 64.97655352819],
    [0.0000003196, 1.53179865789, 221.61966776881],
    [0.00000026763, 5.08057063209, 217.4750661846],
    [0.00000024737, 1.03877406496, 47.9380806769],
    [0.00000031097, 0.82256228232, 98.6012892869],
    [0.00000023919, 4.34411138178, 219.171987214],
    [0.00000029056, 2.9556430929, 106.73292588839],
    [0.00000023488, 2.14499589339, 28.0673581678],
    [0.00000023868, 4.71661725014, 57.4993082325],
    [0.0000002614, 5.22576075259, 91.70019060721],
    [0.00000024837, 1.12156921102, 25.516611749],
    [0.00000028239, 3.07980893828, 131.16013238639],
    [0.00000025242, 1.50128865984, 471.9310244312],
    [0.00000023194, 4.62622223092, 553.82616999929],
    [0.00000023342, 2.85807908852, 61.6920939265],
    [0.00000023751, 5.670026691, 542.78046973539],
    [0.00000022911, 6.01222977731, 234.149840741],
    [0.0000002226, 4.57484369104, 227.77000692311],
    [0.00000021787, 3.04663671917, 19.36627259471],
    [0.00000020991, 2.16357529707, 316.6356871401],
    [0.00000024652, 0.81742897132, 529.44714761109],
    [0.00000023384, 0.19757750866, 254.6997757301],
    [0.00000021352, 3.24093992707, 7.66618102501],
    [0.000000203, 3.6535210757, 467.9988711681],
    [0.00000021096, 4.52992568399, 141.9427080919],
    [0.00000019957, 3.38374254974, 209.6107596584],
    [0.00000022156, 4.08770290595, 68.5998902506],
    [0.00000027098, 4.10293359896, 111.67397898031],
    [0.00000026932, 4.47193756936, 35.40790770471],
    [0.00000023041, 1.03752917223, 486.1581184328],
    [0.00000023558, 5.58348547213, 195.38366565681],
    [0.00000019352, 4.0328938497, 17.0216579039],
    [0.0000001871, 0.49922183447, 69.91760662011],
    [0.00000018292, 2.17112401323, 46.4536079686],
    [0.00000018185, 6.24789116958, 92.5515238691],
    [0.00000020489, 1.98855828236, 116.12739710521],
    [0.00000018124, 1.8138064218, 88.35873817511],
    [0.00000017311, 1.53887757294, 106.5179854398],
    [0.00000019722, 5.08964188825, 296.4012663361],
    [0.00000017322, 2.01071283768, 100.6282787164],
    [0.00000017131, 3.14636583407, 99.1438060081],
    [0.0000002145, 1.26935358079, 191.45151239371],
    [0.00000016758, 5.41014316701, 210.5739675049],
    [0.00000017082, 4.18018061343, 80.1332254815],
    [0.00000019774, 2.05712922006, 80.7575562073],
    [0.00000018159, 1.66942745387, 151.5039356475],
    [0.00000016166, 6.0046768702, 397.14942586389],
    [0.00000016332, 2.08638656812, 94.6691360238],
    [0.00000017336, 1.91313128591, 13.0895046408],
    [0.000000163, 0.86950603727, 23.87457247379],
    [0.00000018165, 0.89317841037, 198.0774244275],
    [0.00000016506, 3.12271859353, 73.38088464811],
    [0.00000016506, 1.55668384247, 76.6699474535],
    [0.00000018503, 4.36296262136, 156.02678974161],
    [0.00000017934, 2.28460392259, 182.00215942271],
    [0.00000015839, 1.55450871101, 13.73719830221],
    [0.00000015946, 6.02088196247, 55.9029609396],
    [0.00000016546, 0.84116196958, 150.8038523594],
    [0.00000017819, 4.98834752372, 221.40721944771],
    [0.00000015752, 2.32623822944, 67.60305250931],
    [0.00000021162, 0.30009257573, 372.66733761171],
    [0.00000019517, 2.68086406105, 479.044571432],
    [0.00000017205, 4.28439583468, 213.0552779545],
    [0.00000015267, 4.22214122299, 68.1243173711],
    [0.00000015236, 2.15369095754, 30.300098274],
    [0.00000015262, 3.36861495242, 67.424234083],
    [0.00000014562, 1.54307290705, 50.9070260935],
    [0.00000015149, 3.50448110876, 135.5799206165],
    [0.00000015898, 1.65436415466, 174.1860370063],
    [0.00000015347, 5.16270714026, 16.7061437188],
    [0.00000014302, 0.85906505598, 310.41591201661],
    [0.00000017345, 3.92152229754, 261.2371761149],
    [0.00000017208, 2.56277716695, 183.85033042589],
    [0.00000017305, 3.31883498051, 77.5067265004],
    [0.00000014612, 5.14027366063, 30.4668546128],
    [0.00000013603, 0.50135686748, 286.8400387805],
    [0.00000015382, 4.901790633, 411.3765198655],
    [0.00000013708, 1.94288900771, 352.06040979221],
    [0.00000013683, 2.35141963414, 82.4477795923],
    [0.00000016002, 0.31096014945, 133.13224006171],
    [0.00000013766, 3.40805334079, 44.31474395451],
    [0.00000013284, 1.25113723802, 7.14491616321],
    [0.00000012988, 5.46561702418, 173.9254045754],
    [0.00000017441, 5.467166887, 60.79832204921],
    [0.00000016261, 0.42832337657, 64.73047531231],
    [0.00000012734, 1.40651697882, 75.54668091261],
    [0.00000012734, 0.13129280359, 74.504151189],
    [0.000000127, 0.13947960635, 57.75994066341],
    [0.00000014302, 5.43417049382, 45.82046852221],
    [0.00000012678, 3.64176420295, 81.9265147305],
    [0.00000016549, 4.35598801081, 760.01171843649],
    [0.0000001272, 1.24629809128, 270.1652642241],
    [0.00000013453, 5.32132524673, 12.28635548869],
    [0.00000012225, 5.94217729762, 284.39235822571],
    [0.00000011971, 0.20211111004, 32.48714639791],
    [0.00000012357, 0.99159645729, 515.70768857651],
    [0.00000012069, 4.64103232444, 633.0275567967],
    [0.00000013087, 3.37495487812, 109.701871305],
    [0.00000011341, 1.3844931226, 189.47940471839],
    [0.00000015361, 2.17588834575, 200.52510498229],
    [0.00000012491, 5.89815036388, 33.9234349964],
    [0.00000014227, 6.04854994765, 203.49405039889],
    [0.00000011094, 4.55762820174, 267.22994870229],
    [0.0000001208, 1.08604052506, 75.6798073566],
    [0.0000001208, 3.59336191094, 74.37102474501],
    [0.00000013196, 3.12727419182, 143.38148881789],
    [0.0000001353, 4.25106140608, 85.3203567893],
    [0.00000010739, 4.95842698659, 94.147871162],
    [0.00000010888, 6.11572731494, 2.7251279331],
    [0.0000001383, 3.79412478066, 31.8964455669],
    [0.00000011969, 2.59214165717, 42.78208713641],
    [0.00000011212, 1.11251818011, 61.5320352321],
    [0.00000011583, 3.50244713214, 124.5342203526],
    [0.00000012891, 3.37083041051, 266.233110961],
    [0.00000010738, 1.68908917101, 35.6685401356],
    [0.00000013803, 2.6671149473, 26.2673712744],
    [0.00000010459, 3.55111688475, 145.1411481721],
    [0.00000010474, 0.04265764253, 692.34366686999],
    [0.00000010123, 3.61491688022, 237.11878615761],
    [0.000000098, 4.50501895948, 92.2908914382],
    [0.00000010121, 5.88328450143, 156.3992967571],
    [0.00000009888, 1.02644746029, 42.88515300039],
    [0.00000010092, 2.39040220276, 215.0273856298],
    [0.00000010098, 5.97397137094, 533.1161763158],
    [0.00000010667, 4.94448780106, 91.8032564712],
    [0.00000010954, 5.27602541461, 89.2525100524],
    [0.0000000963, 2.63099197865, 55.38169607781],
    [0.00000009631, 1.67427906238, 130.6845595069],
    [0.00000009832, 1.26051341005, 54.5785469257],
    [0.00000009739, 4.11020952975, 76.62176334371],
    [0.00000009739, 3.71078555984, 73.4290687579],
    [0.00000010658, 2.71100873007, 31.24875190549],
    [0.00000009264, 4.78218994698, 27.3311528574],
    [0.00000011861, 3.13876851681, 264.2610032857],
    [0.00000009015, 3.77562206958, 17.91542978119],
    [0.0000000917, 0.46232213879, 203.9816853659],
    [0.00000008989, 2.84106606677, 69.12115511239],
    [0.00000009028, 0.87504387157, 141.4550731249],
    [0.00000009664, 0.82099305011, 41.8883152591],
    [0.0000000894, 0.30017564872, 17.28229033479],
    [0.00000010494, 2.74211545956, 624.6756153035],
    [0.00000010035, 1.72606687342, 448.9334088873],
    [0.00000010076, 1.82928700699, 685.2301198692],
    [0.00000008857, 0.2514720651, 44.48150029329],
    [0.00000008598, 4.49527247841, 199.3158189199],
    [0.00000009805, 4.588441097, 130.1632946451],
    [0.00000008882, 4.32628974331, 105.2484531801],
    [0.00000008882, 1.18469708972, 105.7360881471],
    [0.00000008493, 5.7590738991, 104.2303635794],
    [0.00000008845, 3.56612831103, 88.5187968695],
    [0.00000008246, 4.25831523402, 269.6776292571],
    [0.00000008157, 6.12519363628, 163.82166029861],
    [0.00000008392, 1.12264471721, 681.2979666061],
    [0.00000009056, 4.19874386884, 617.5620683027],
    [0.00000008249, 5.01876074157, 454.6655490438],
    [0.00000008521, 6.01861922798, 155.7449054513],
    [0.00000010211, 3.35774355357, 145.387226388],
    [0.00000007859, 2.48342946211, 119.7507338276],
    [0.00000008216, 0.22375706672, 544.1618765797],
    [0.00000008454, 1.80026883651, 393.2172726008],
    [0.00000008005, 5.18146648973, 141.7302597708],
    [0.00000008848, 5.52195322186, 193.4115579815],
    [0.00000007843, 5.11391333266, 46.8173062635],
    [0.00000007556, 5.15797138498, 66.6734745576],
    [0.00000007436, 0.34704884871, 178.11819026941],
    [0.00000009047, 1.9432151419, 3.42521122121],
    [0.00000007519, 5.21881995453, 341.01470952831],
    [0.00000007416, 5.46939147004, 606.5163680388],
    [0.00000007453, 4.06769415789, 175.40987728371],
    [0.00000007475, 0.09186374252, 58.0754548485],
    [0.00000008741, 3.2155962806, 58.9837809408],
    [0.00000008749, 4.60735412655, 179.9181771628],
    [0.00000007892, 4.97472641388, 207.6386519831],
    [0.00000008402, 4.6420766942, 70.2901136356],
    [0.00000008402, 0.0373257418, 79.76071846601],
    [0.00000008251, 3.53826439231, 58.5630898155],
    [0.0000000814, 4.15546301933, 39.9162075838],
    [0.00000007045, 4.59142381429, 949.4194264533],
    [0.0000000707, 3.43062742384, 610.44852130189],
    [0.00000007791, 0.14153367545, 196.3805033981],
    [0.00000006907, 2.01398038315, 107.74182571721],
    [0.0000000773, 2.22526686348, 111.18634401329],
    [0.00000007449, 1.30897364813, 142.3846510766],
    [0.00000006733, 1.57499395274, 49.75262178531],
    [0.00000007683, 3.44536738109, 201.01273994931],
    [0.00000007711, 5.91236505361, 210.60759739969],
    [0.0000000678, 5.36729251438, 78.6487527732],
    [0.0000000678, 5.5952952288, 71.4020793284],
    [0.00000006908, 2.35029974307, 21.84758304429],
    [0.00000006741, 1.43650205247, 363.1061100561],
    [0.00000006686, 0.93018730801, 109.0687318586],
    [0.00000006572, 3.28593985233, 216.72430665921],
    [0.00000006803, 3.4188891819, 95.47228517591],
    [0.0000000656, 4.25376256253, 117.5636857037],
    [0.00000007044, 5.8510584036, 114.6978061511],
    [0.00000006442, 1.02882559759, 49.47743513939],
    [0.00000006451, 3.83095342617, 118.6299594142],
    [0.00000006473, 1.57630900935, 37.88921815429],
    [0.00000006192, 5.11515001565, 380.847158323],
    [0.00000006192, 3.97082658887, 528.9715747316],
    [0.00000006479, 5.64756980391, 133.34468838281],
    [0.00000006479, 2.50597715032, 132.85705341579],
    [0.00000006351, 1.72152539515, 45.9659730016],
    [0.00000006402, 1.5845005299, 535.6669227346],
    [0.00000007995, 4.48478615852, 35.18090516859],
    [0.00000006129, 3.11693398156, 136.3136337994],
    [0.0000000646, 3.76193692281, 216.2366716922],
    [0.00000006081, 3.50561897791, 530.89799042461],
    [0.00000006081, 5.58035711965, 378.92074262999],
    [0.00000006809, 1.01024597901, 237.4343003427],
    [0.00000007057, 1.73750471495, 526.7533888404],
    [0.000000071, 5.98370032528, 71.5688356672],
    [0.00000006155, 3.48243401917, 142.9059159384],
    [0.00000006607, 3.46558761195, 192.448350135],
    [0.00000006635, 5.56195112276, 34.28713329129],
    [0.00000006319, 2.0063198817, 143.5872394946],
    [0.000000062, 4.10240423487, 455.1531840108],
    [0.00000006495, 1.71004202786, 24.6228398717],
    [0.00000007911, 4.07321915455, 77.7191748215],
    [0.00000005852, 6.21910710624, 405.747445573],
    [0.00000006837, 4.49077930583, 375.6362830283],
    [0.00000005864, 4.03382406011, 108.1625168425],
    [0.00000007485, 2.72090049326, 48.51422729289],
    [0.00000005956, 0.03354236238, 28.98238190449],
    [0.00000006512, 0.33716951919, 549.8940167362],
    [0.00000006744, 5.79310902549, 27.96429230381],
    [0.00000005515, 0.51259584253, 232.66536803271],
    [0.00000005532, 5.03129304553, 164.78486814511],
    [0.00000006345, 1.14676616638, 91.48774228611],
    [0.0000000649, 3.33824483658, 180.03005174739],
    [0.00000005431, 5.14429257646, 28.5549931348],
    [0.00000005425, 2.94479941279, 73.6528179271],
    [0.00000005425, 4.8761956768, 76.3980141745],
    [0.00000005562, 3.83479812657, 125.42799222991],
    [0.00000005415, 1.8053372426, 15.7978176265],
    [0.00000006477, 1.46410180306, 91.06705116081],
    [0.00000005588, 3.90608403947, 408.19512612779],
    [0.00000005776, 2.5357602948, 218.6507223522],
    [0.0000000535, 0.82591840288, 30.9881194746],
    [0.00000005255, 2.80372355337, 49.42255338521],
    [0.00000005759, 3.12808755452, 35.9291725665],
    [0.00000005412, 2.06393135001, 22.3900997655],
    [0.0000000677, 0.90781613617, 118.15438653471],
    [0.0000000538, 4.15958938612, 234.252906605],
    [0.00000005209, 4.69294629475, 210.36151918381],
    [0.00000005177, 0.85327766347, 34.86539098351],
    [0.0000000516, 2.33442145165, 312.21589891],
    [0.00000005191, 1.32715405123, 853.4401992355],
    [0.00000005099, 4.39680257081, 248.9676355736],
    [0.00000005267, 2.38447630057, 167.07249000551],
    [0.00000005553, 5.79137517506, 756.07956517339],
    [0.00000005467, 5.96148887147, 301.17019864609],
    [0.00000004979, 1.9671192063, 82.6145359311],
    [0.0000000489, 2.71095292959, 114.38229196601],
    [0.00000004949, 3.89860321039, 72.090100529],
    [0.00000006602, 5.0790426984, 123.2958258602],
    [0.00000006602, 1.93745004481, 123.78346082721],
    [0.0000000537, 0.89842846047, 293.95358578131],
    [0.00000005201, 5.31738820937, 67.1154175423],
    [0.00000005872, 5.68047849308, 406.3469551246],
    [0.0000000525, 1.81385138125, 830.8611637407],
    [0.00000004889, 2.54047179761, 319.3294459108],
    [0.00000005168, 1.40578632698, 148.11009358871],
    [0.00000006514, 0.7844122724, 302.3391571693],
    [0.0000000508, 0.28960001676, 163.1403367424],
    [0.00000004695, 2.65284801875, 105.13657859549],
    [0.00000005583, 3.5501354439, 283.9047232587],
    [0.00000004645, 3.3103961728, 87.87110320809],
    [0.00000005916, 2.46533961374, 117.6667515677],
    [0.00000004506, 3.11040332239, 100.2982103163],
    [0.00000004545, 0.31134321952, 52.3914988018],
    [0.00000004927, 3.4117264354, 78.4699343469],
    [0.00000005394, 5.63937544494, 231.8052260502],
    [0.00000005223, 3.37807753565, 376.7025567388],
    [0.00000004438, 5.11989115592, 748.9660181726],
    [0.00000005514, 3.30050922849, 281.210964488],
    [0.00000005215, 2.6696813667, 336.5949212982],
    [0.00000005879, 4.76844539244, 402.77850015639],
    [0.0000000542, 4.23957972129, 322.3678272966],
    [0.00000004308, 2.99235015837, 122.71967924421],
    [0.00000004264, 5.47096482557, 257.14745628489],
    [0.0000000452, 0.0616885912, 49.0018622599],
    [0.00000004775, 4.74715224337, 57.86300652739],
    [0.00000004774, 0.72465901741, 827.67977000299],
    [0.00000004196, 2.18199332677, 222.14093263061],
    [0.00000004391, 2.40221065865, 103.597224133],
    [0.00000005698, 2.18138522351, 43.84836084689],
    [0.00000004161, 1.5109306744, 43.79347909271],
    [0.00000004435, 3.47733063247, 102.11275142471],
    [0.00000004326, 5.43731062929, 25.3590451821],
    [0.00000004344, 2.49176998053, 49.8956341372],
    [0.00000005029, 5.57234403587, 189.42452296421],
    [0.00000004148, 4.15948358685, 271.3745502865],
    [0.00000004154, 6.03273715174, 170.41394243761],
    [0.00000005131, 1.92264207412, 107.2687449652],
    [0.00000004194, 0.39440009742, 383.0653442142],
    [0.00000004307, 4.99708612912, 106.0303504728],
    [0.00000004419, 3.76956477081, 422.42222012939],
    [0.00000004369, 4.33115498014, 596.1183614363],
    [0.00000004317, 3.81351212469, 610.3454554379],
    [0.00000003889, 1.51405800707, 501.62360692681],
    [0.0000000387, 0.14021790007, 196.01680510321],
    [0.00000004439, 5.51958079768, 302.13340649259],
    [0.00000005072, 0.43837563544, 841.9068640046],
    [0.0000000457, 3.91226778053, 25.3041634279],
    [0.00000003853, 2.96855650488, 327.9969015891],
    [0.00000004468, 4.1194042454, 20.953811167],
    [0.00000003811, 0.01397482107, 121.59890483079],
    [0.00000004526, 0.82818905303, 223.20720634109],
    [0.00000004482, 1.11896687809, 30.3549800282],
    [0.00000003991, 5.99550015236, 227.03629374021],
    [0.00000003731, 1.40856591302, 379.8839504765],
    [0.00000003956, 2.99745197998, 995.88984936931],
    [0.00000003718, 2.08586976042, 323.74923414091],
    [0.00000004018, 4.76974981374, 136.78920667889],
    [0.00000004001, 1.99020462896, 1887.5493351592],
    [0.00000003691, 2.98850914165, 219.275053078],
    [0.00000004238, 3.01325561075, 487.6425911411],
    [0.00000004319, 2.53620903359, 470.44655172289],
    [0.00000003696, 5.63712983624, 95.7354097343],
    [0.00000003585, 1.93930258808, 647.25465079831],
    [0.00000003615, 1.77670736543, 38.85242600079],
    [0.00000004508, 4.47625982819, 763.1931121742],
    [0.00000004774, 4.03912030608, 205.9417309537],
    [0.00000003585, 2.9108714732, 819.8154634768],
    [0.00000003631, 3.67446828489, 310.73142620169],
    [0.00000003713, 6.24192528203, 906.60597015449],
    [0.00000004069, 0.88739646436, 331.9290548522],
    [0.00000003909, 0.70513913859, 204.9448932124],
    [0.00000003826, 1.29816477857, 253.2153030218],
    [0.00000004459, 2.50646590612, 49.26498681829],
    [0.00000003398, 1.39293258032, 548.0940298428],
    [0.0000000444, 3.51258788632, 54.89406111079],
    [0.00000003614, 1.87312866978, 511.2879003464],
    [0.00000003347, 6.01125856091, 672.3844327119],
    [0.00000003809, 2.94099106051, 328.5964111407],
    [0.00000003555, 2.04617284577, 1368.9040703285],
    [0.00000004016, 5.85194527186, 442.9955180541],
    [0.00000003311, 1.96162447032, 185.2317372702],
    [0.00000003338, 0.74390697506, 90.2157178989],
    [0.00000003346, 3.86205100951, 10022.0810975829],
    [0.00000003379, 1.27980657609, 1051.0277279636],
    [0.00000003359, 4.15037031744, 40.8245336761],
    [0.00000003472, 4.54582298831, 141.8970161096],
    [0.0000000347, 2.81336320056, 1068.22376738181],
    [0.00000003246, 2.64937498416, 30.9332377204],
    [0.00000003583, 3.30161972679, 297.9888049084],
    [0.00000004055, 1.93337998586, 228.83628063359],
    [0.00000003241, 4.84350666121, 34.44469985821],
    [0.00000003616, 5.85754552815, 736.1203310153],
    [0.0000000356, 1.84750411756, 334.89800026879],
    [0.00000004091, 2.74520731196, 913.5070688342],
    [0.00000003191, 2.73872114679, 374.46732450509],
    [0.00000003544, 2.06135009476, 484.6736457245],
    [0.00000003559, 1.03318246123, 781.8399944059],
    [0.00000003813, 1.3465608329, 342.0115472696],
    [0.00000003256, 1.24896843058, 97.17169833279],
    [0.00000003256, 4.39056108417, 97.65933329981],
    [0.00000003853, 5.18264549398, 122.08653979781],
    [0.00000004122, 3.91372590203, 339.042601853],
    [0.00000003135, 2.9843338281, 674.1844196053],
    [0.00000003359, 1.72611682483, 369.8014580591],
    [0.00000004038, 3.9179997161, 146.3504342345],
    [0.0000000401, 1.51104428423, 60.52313540329],
    [0.00000003941, 6.00494630962, 729.0067840145],
    [0.00000003097, 3.84522192892, 115.1854411181],
    [0.00000003291, 5.82922546122, 2424.3538472546],
    [0.00000003582, 1.33109700739, 349.12509427039],
    [0.00000003393, 3.29245537264, 290.8752579076],
    [0.00000003127, 3.80374553395, 582.13734565059],
    [0.00000003177, 4.9082210532, 194.5323323949],
    [0.00000003592, 3.97438571867, 1512.56300652469],
    [0.00000003448, 1.31714326925, 630.5798762419],
    [0.00000003156, 0.32123034412, 555.3106427076],
    [0.00000003587, 5.29397199806, 333.0498292656],
    [0.00000003671, 3.02735059577, 480.52904414029],
    [0.00000003505, 0.07758783831, 52.13086637091],
    [0.00000003028, 1.5563323268, 260.1164017015],
    [0.00000003021, 0.8586919472, 745.03386490949],
    [0.00000003015, 2.32337006649, 1053.9966733802],
    [0.00000003255, 1.55383041618, 114.1216595351],
    [0.00000003582, 1.17206776414, 292.9446859525],
    [0.00000004061, 5.52420276067, 758.5272457282],
    [0.00000003736, 1.93693485461, 5983.7056382387],
    [0.00000003303, 5.99394142769, 532.3824631329],
    [0.00000004088, 3.98322803937, 1265.0605365845],
    [0.0000000296, 0.15626969632, 15.7429358723],
    [0.00000003705, 6.19165022961, 604.7163811454],
    [0.00000003156, 4.35441637869, 657.4065791849],
    [0.00000003133, 0.33631156286, 346.1561488538],
    [0.00000003653, 5.34287546352, 601.7474357288],
    [0.00000003119, 3.48694146196, 969.37866061139],
    [0.00000002876, 3.93018614308, 61.0444002651],
    [0.00000002838, 1.17114170634, 595.1551535898],
    [0.00000003359, 3.37955835963, 229.0420313103],
    [0.00000003882, 6.09416558245, 275.7943385166],
    [0.00000003259, 2.58480605176, 184.48346987229],
    [0.00000003003, 3.40174825635, 531.73476947149],
    [0.00000002904, 2.44331654879, 90.52453443961],
    [0.00000003653, 4.53993927617, 34.9202727377],
    [0.00000003037, 0.49193141146, 432.574148516],
    [0.00000002813, 3.15838961401, 106.2573530089],
    [0.00000003621, 1.65359893537, 156.9205616189],
    [0.00000003602, 4.72951169393, 162.6527017754],
    [0.00000003499, 4.24251782948, 296.50433220009],
    [0.00000003773, 5.65516568689, 357.79254994869],
    [0.00000003503, 3.36034498099, 9913.91533445829],
    [0.00000003442, 5.17751962044, 689.1622731323],
    [0.00000002741, 2.7964219183, 279.9725699956],
    [0.00000002811, 0.21105822548, 526.00262931501],
    [0.00000002811, 0.21105822548, 525.514994348],
    [0.00000002855, 4.14691508428, 49.1619209543],
    [0.00000003389, 3.1018007677, 1471.2460850217],
    [0.00000002713, 0.85189767911, 395.6649531556],
    [0.00000002786, 6.05589669892, 121.4958389668],
    [0.00000002898, 4.64602066056, 101.04896984171],
    [0.00000002865, 4.44084667312, 525.4813644532],
    [0.00000003424, 1.02662988746, 1065.35788782919],
    [0.00000002851, 5.26092114416, 344.9468627914],
    [0.00000003251, 3.02407658514, 4.2096006414],
    [0.00000002737, 1.85379067922, 1065.2548219652],
    [0.0000000295, 3.40947832795, 256.08118257441],
    [0.00000002631, 2.35346659913, 833.30884429549],
    [0.00000003298, 0.35354217872, 469.48334387639],
    [0.00000003109, 1.56878798104, 626.16008801179],
    [0.00000003056, 5.2554272941, 222.6165055101],
    [0.00000002887, 4.00574991438, 241.3664536058],
    [0.0000000288, 2.11510054841, 370.2196570569],
    [0.00000002756, 5.495102864, 103.7639804718],
    [0.00000002886, 1.01588865321, 668.4522794488],
    [0.00000003592, 5.1904199348, 1062.59469308931],
    [0.00000003123, 1.19879958924, 384.02855206069],
    [0.0000000275, 3.16455625165, 628.6077685666],
    [0.00000002877, 4.46420389167, 6058.48723680599],
    [0.00000002805, 0.4497397285, 2111.8941308611],
    [0.00000002563, 5.13388413274, 440.43845504219],
    [0.00000002563, 5.13388413274, 440.9260900092],
    [0.00000002696, 4.53768728515, 187.78248368899],
    [0.00000002619, 5.83386297293, 218.1630873852],
    [0.0000000325, 4.11861466788, 608.9640485936],
    [0.00000002535, 5.86019269756, 546.71262299849],
    [0.00000002863, 1.3664581657, 637.69342324271],
    [0.0000000251, 1.15126001886, 1258.6977491091],
    [0.00000002502, 4.83412535374, 766.128427696],
    [0.00000002501, 5.52832480667, 108.2173985967],
    [0.00000002522, 2.97707565426, 115.6061322434],
    [0.00000002695, 6.17673554826, 592.1862081732],
    [0.0000000276, 2.62533693066, 631.7891623043],
    [0.00000002903, 0.96759074876, 620.4973838245],
    [0.00000002884, 0.01635711768, 5.1728084879],
    [0.0000000289, 1.744396009, 361.62163734781],
    [0.00000002464, 4.66328256455, 416.79314583689],
    [0.00000003268, 4.10372444017, 39.3736908626],
    [0.00000002473, 1.65858882314, 368.83825021259],
    [0.00000003222, 5.3628388335, 421.212934067],
    [0.00000002626, 2.67212495415, 135.8259988324],
    [0.00000002497, 0.51632716818, 109.2262984255],
    [0.00000002634, 1.68453170822, 159.47130803769],
    [0.00000003221, 2.46115208149, 124.2590337067],
    [0.00000002517, 5.73217436168, 389.9664428939],
    [0.00000002921, 4.97586465251, 109.9625037359],
    [0.00000003208, 6.15657013497, 436.50630177909],
    [0.00000002416, 1.90511651044, 531.4192552864],
    [0.00000003214, 4.11241434108, 256.18424843839],
    [0.00000002505, 5.56614254079, 460.8853241673],
    [0.00000002681, 5.8855809874, 9988.69693302559],
    [0.00000002782, 2.35083058245, 947.28726008359],
    [0.00000002409, 0.47303616104, 1228.25440708809],
    [0.00000002353, 3.93573483899, 75.2378643719],
    [0.00000002353, 3.8852602506, 74.81296772971],
    [0.0000000244, 1.03735538956, 894.5970620441],
    [0.00000002656, 1.88372367878, 623.4663292411],
    [0.00000002337, 1.20346306186, 533.8669358412],
    [0.00000002402, 0.39312271717, 843.8789716799],
    [0.00000003239, 3.93030878487, 956.53297345411],
    [0.00000003017, 3.28682609944, 2043.73844432759],
    [0.00000003017, 3.28682609944, 2044.2260792946],
    [0.00000002405, 2.26306379161, 59.038662695],
    [0.00000002405, 5.4046564452, 59.526297662],
    [0.00000002976, 3.41026880242, 80.65449034331],
    [0.00000002378, 1.24449551265, 223.6254053389],
    [0.00000002317, 5.89016852592, 247.2225304344],
    [0.00000002571, 3.46653079079, 595.47066777489],
    [0.00000002545, 1.99218841509, 450.2121309189],
    [0.00000002346, 3.33503291769, 60.3106870822],
    [0.00000002905, 0.84313259036, 344.45922782439],
    [0.00000002979, 2.8412833526, 370.3227229209],
    [0.000000024, 3.25893447553, 14.7340360435],
    [0.00000002717, 6.02377356419, 479.6440809836],
    [0.00000002611, 2.56467646999, 3116.0238135144],
    [0.00000002621, 1.82920672957, 78.99119920869],
    [0.00000002223, 0.33085814506, 53.82778740031],
    [0.00000002402, 0.32300012534, 298.8825767857],
    [0.0000000299, 5.53041231058, 1812.2801016249],
    [0.00000002451, 0.34339233154, 230.8083883089],
    [0.00000002234, 3.79720855786, 6144.3145356372],
    [0.00000002327, 0.27187374064, 756.56720014041],
    [0.00000002505, 0.40988568764, 98.6561710411],
    [0.00000002409, 3.4190486215, 248.48000060659],
    [0.00000002564, 5.30963250248, 554.31380496631],
    [0.00000002094, 3.86522425502, 451.2210307477],
    [0.00000002094, 0.72363160144, 450.73339578069],
    [0.00000002295, 4.07822849681, 767.1252654373],
    [0.00000002295, 0.93663584322, 767.61290040431],
    [0.00000002066, 3.03632358122, 518.40144734719],
    [0.00000002066, 6.17791623481, 518.8890823142],
    [0.00000002137, 5.77720147587, 192.935985102],
    [0.00000002874, 2.99281146129, 1336.1731064471],
    [0.00000002325, 3.5873648654, 217.16624964391],
    [0.00000002325, 3.5873648654, 216.67861467689],
    [0.00000002567, 3.86077733216, 980.4243608753],
    [0.00000002617, 1.18764734158, 130.1969245399],
    [0.00000002128, 3.5473166185, 180.51768671441],
    [0.00000002474, 0.80985182636, 124.7466686737],
    [0.00000002195, 3.69540445414, 449.5241097183],
    [0.00000002195, 0.55381180055, 449.0364747513],
    [0.00000002135, 1.00327310585, 112.6708167216],
    [0.00000001942, 3.76423202456, 196.8681383651],
    [0.00000001912, 2.0543070466, 119.1175943812],
    [0.00000002139, 4.56457588625, 179.0332140061],
    [0.00000002139, 4.56457588625, 178.5455790391],
    [0.0000000195, 0.56420918284, 39.1130584317],
    [0.00000001854, 5.12023202898, 355.2418035299],
    [0.00000001854, 5.12023202898, 354.75416856289],
    [0.00000001854, 4.7249332195, 198.82818395289],
    [0.00000001965, 4.47911184507, 84.0990086394],
    [0.00000002359, 4.45376932769, 31.73638687251],
    [0.00000001903, 5.59243523932, 153.25153291419],
    [0.00000002125, 2.89742576427, 490.5779066629],
    [0.00000002125, 2.89742576428, 490.09027169589],
    [0.00000001914, 1.23863728949, 331.45348197271],
    [0.00000001914, 4.38022994308, 330.9658470057],
    [0.00000002417, 5.19667401678, 139.7581520955],
    [0.00000002146, 0.08821351821, 463.2635687529],
    [0.00000002146, 3.2298061718, 463.75120371991],
    [0.00000001907, 5.00652893184, 458.12212942741],
    [0.00000001907, 1.86493627825, 457.6344944604],
    [0.00000001967, 1.07124636244, 180.81194904009],
    [0.00000001967, 1.07124636244, 181.2995840071],
    [0.00000002145, 4.8537532099, 66.42739634171],
    [0.00000002145, 4.8537532099, 65.9397613747],
    [0.00000001797, 3.97024155339, 757.5640378817],
    [0.00000001797, 0.8286488998, 758.0516728487],
    [0.0000000175, 5.85679825237, 144.8659615262],
    [0.00000002036, 0.77312847257, 304.1055141679],
    [0.00000002036, 3.91472112616, 303.6178792009],
    [0.00000001797, 1.89213659166, 704.8738398422],
    [0.00000001797, 5.03372924525, 705.36147480921],
    [0.00000001894, 5.59204990603, 910.0625505381],
    [0.00000001894, 2.45045725245, 909.5749155711],
    [0.00000001722, 0.77969749873, 67.6366824041],
    [0.00000001837, 1.37910752336, 544.2649424437],
    [0.00000001837, 1.37910752336, 544.7525774107],
    [0.00000001726, 4.71165482381, 1507.42156719921],
    [0.00000001726, 4.71165482381, 1506.93393223219],
    [0.0000000173, 4.46134223293, 565.35950523021],
    [0.0000000173, 4.46134223293, 564.8718702632],
    [0.00000001877, 5.10265146514, 582.62498061761],
    [0.00000001795, 4.96114630442, 681.7856015731],
    [0.00000001921, 0.82498060567, 699.4572138708],
    [0.00000001983, 0.97771499558, 256.78375799],
    [0.00000001983, 0.97771499559, 256.296123023],
    [0.00000001763, 5.33310923745, 1521.6486612008],
    [0.00000001763, 5.33310923745, 1521.16102623379],
    [0.00000002238, 2.09108890473, 699.94484883781],
    [0.00000001965, 2.07895283772, 1317.26309965699],
    [0.00000001965, 5.22054549131, 1317.75073462401],
    [0.00000001641, 4.21606567095, 76.9854616386],
    [0.00000001645, 1.65058956203, 237.9219353097],
    [0.0000000188, 3.4610448573, 71.3563873461],
    [0.00000002123, 1.67868119422, 528.4503098698],
    [0.00000002123, 1.67868119422, 527.9626749028],
    [0.00000002071, 2.17956762731, 688.41151360689],
    [0.00000002071, 2.17956762731, 688.89914857391],
    [0.00000002066, 0.76498091962, 182.998997164],
    [0.0000000208, 3.39549064677, 415.7963080956],
    [0.0000000161, 0.29709580866, 173.6984020393],
    [0.00000001624, 3.67562727861, 683.74564716089],
    [0.00000001624, 0.53403462502, 684.23328212791],
    [0.00000001582, 5.35394360679, 349.0914643756],
    [0.00000001582, 2.2123509532, 348.6038294086],
    [0.00000001525, 1.6712827262, 555.7982776746],
    [0.00000001823, 3.83750566677, 290.46337550291],
    [0.00000001823, 0.69591301318, 289.97574053589],
    [0.00000001524, 2.71848730694, 1303.0360056554],
    [0.00000001524, 5.86007996053, 1303.52364062241],
    [0.00000001902, 1.08556559808, 351.5727748252],
    [0.00000001683, 5.22184240312, 477.5600987237],
    [0.00000001683, 5.22184240312, 478.0477336907],
    [0.00000001652, 3.50958885438, 473.9031321065],
    [0.00000001652, 3.50958885438, 473.4154971395],
    [0.00000001475, 3.7286839664, 406.71065341949],
    [0.00000001475, 3.7286839664, 407.1982883865],
    [0.00000001473, 3.18933946169, 376.4394321804],
    [0.00000001473, 3.18933946169, 375.9517972134],
    [0.00000001646, 1.83930538139, 330.080883849],
    [0.00000001646, 1.83930538139, 329.593248882],
    [0.00000002036, 1.9431205435, 402.4629859713],
    [0.00000002036, 5.08471319709, 401.9753510043],
    [0.00000001806, 0.37937472852, 105.6242135625],
    [0.00000001436, 2.8466518819, 384.3037387066],
    [0.00000001436, 5.98824453549, 383.81610373959],
    [0.00000001436, 5.73162200977, 192.5602247196],
    [0.00000001436, 2.59002935618, 193.0478596866],
    [0.00000001579, 5.41871812435, 74.6496556684],
    [0.00000001983, 1.16308584406, 28.32799059869],
    [0.00000001517, 2.32668455089, 696.7634551001],
    [0.00000001517, 5.46827720448, 696.2758201331],
    [0.00000001512, 0.6619753414, 482.9767246951],
    [0.00000001512, 0.6619753414, 483.4643596621],
    [0.00000001507, 2.6571629344, 420.9377474211],
    [0.00000001507, 2.6571629344, 421.4253823881],
    [0.00000001461, 1.45515033376, 6208.5380689076],
    [0.00000001461, 1.45515033376, 6208.0504339406],
    [0.00000001593, 2.52079664808, 1441.237988341],
    [0.00000001593, 5.66238930167, 1440.750353374],
    [0.00000001473, 0.74953156826, 818.33099076849],
    [0.00000001473, 3.89112422185, 818.8186257355],
    [0.00000001672, 0.52981567811, 1598.71788162851],
    [0.00000001672, 3.6714083317, 1598.23024666149],
    [0.00000001531, 3.55867760683, 1737.9861380246],
    [0.00000001531, 3.55867760683, 1737.49850305759],
    [0.00000001912, 4.4060479773, 486.64575339981],
];

const Y2: &[Term] = &[
    [0.0101661895, 5.4829539072, 75.0254160508],
    [0.00038040244, 5.98396870387, 0.2438174835],
    [0.00034677856, 1.59683674929, 149.8070146181],
    [0.00012364786, 4.28633873136, 76.50988875911],
    [0.00007910801, 2.23474062458, 11.2895177474],
    [0.00007671667, 0.96951294592, 63.9797157869],
    [0.00005406463, 3.19611828309, 71.09326278771],
    [0.0000700765, 3.73693507089, 86.07111631471],
    [0.00004975036, 1.46390866707, 78.9575693139],
    [0.00003201017, 1.298883677, 74.53778108379],
    [0.00003151344, 2.97264499518, 73.5409433425],
    [0.00002824019, 2.46329588481, 138.76131435421],
    [0.00003389631, 5.1424748942, 1.7282901918],
    [0.00002518149, 1.7869951601, 71.8440223131],
    [0.00002418298, 2.88506969771, 78.2068097885],
    [0.00002201666, 5.57455075609, 4.1759707466],
    [0.00001870514, 4.21015183892, 224.5886131854],
    [0.00001040809, 5.43378129938, 145.874861355],
    [0.00000825679, 3.0032507602, 148.32254190981],
    [0.00000856424, 0.62220902296, 151.2914873264],
    [0.00000661761, 5.72562810777, 18.40306474821],
    [0.00000687998, 3.3633181674, 77.9943614674],
    [0.00000504683, 3.72460726525, 22.3352180113],
    [0.00000477418, 1.60651996166, 72.577735496],
    [0.00000476558, 3.42662179631, 2.9375762542],
    [0.00000417277, 6.26887017967, 160.852714882],
    [0.00000385934, 3.14575356964, 77.4730966056],
    [0.00000325076, 4.72083769491, 65.46418849521],
    [0.00000284902, 5.24555103176, 131.6477673534],
    [0.00000257868, 3.40246798687, 56.8661687861],
    [0.0000033426, 3.94997003912, 3.21276290011],
    [0.0000022724, 1.00970775338, 127.71561409031],
    [0.00000308306, 0.17254957815, 84.5866436064],
    [0.00000220448, 1.89180052783, 220.6564599223],
    [0.00000207595, 1.11792349211, 12.77399045571],
    [0.0000020641, 1.32580238054, 93.1846633155],
    [0.00000207522, 0.26193997823, 213.5429129215],
    [0.00000209061, 3.99916829829, 153.73916788121],
    [0.00000215886, 6.16271220897, 72.05647063421],
    [0.00000212084, 2.67452073343, 87.555589023],
    [0.00000208906, 1.05579446681, 52.446380556],
    [0.00000151875, 6.08269315176, 206.42936592071],
    [0.00000148298, 0.02551800142, 9.8050450391],
    [0.00000192262, 0.59276641736, 529.9347825781],
    [0.00000119051, 0.55858786575, 299.37021175271],
    [0.00000132408, 5.56072688448, 52.934015523],
    [0.00000117583, 2.55509093793, 522.8212355773],
    [0.0000011453, 4.91719768081, 537.0483295789],
    [0.00000105238, 2.52245002296, 127.22797912329],
    [0.00000098089, 0.44292716212, 80.44204202221],
    [0.0000011425, 6.16582036197, 7.3573644843],
    [0.00000097881, 5.59286140261, 97.11681657861],
    [0.00000106194, 4.32064505626, 146.6256208804],
    [0.00000089216, 1.17705594524, 67.91186905],
    [0.0000011634, 5.31120252949, 38.3768531213],
    [0.00000077574, 3.41292158693, 82.13896305161],
    [0.00000084483, 5.24247398645, 223.1041404771],
    [0.00000098707, 2.0315257888, 62.4952430786],
    [0.00000068606, 0.89160531388, 426.8420083595],
    [0.00000066709, 3.48909893013, 2.69149803831],
    [0.00000065809, 1.97527994783, 15.2216710105],
    [0.00000067096, 3.25627562801, 226.07308589371],
    [0.00000087378, 4.13754658007, 39.86132582961],
    [0.00000062935, 3.90702021396, 149.3193796511],
    [0.00000061638, 0.99025506838, 152.9884083558],
    [0.00000065914, 2.38989307822, 79.47883417571],
    [0.00000059769, 3.9625325838, 10.8018827804],
    [0.00000059691, 4.46676970396, 56.3785338191],
    [0.00000056598, 5.97114569701, 152.77596003471],
    [0.00000052271, 0.30381307123, 70.6056278207],
    [0.00000067381, 2.51665952752, 111.67397898031],
    [0.00000048944, 3.5552223611, 63.49208081989],
    [0.00000048935, 6.11180947236, 194.89603068979],
    [0.00000058953, 4.45076342362, 34.9202727377],
    [0.00000042178, 4.17195774633, 146.8380692015],
    [0.00000041131, 2.21857435803, 209.12312469139],
    [0.00000048341, 4.60129323937, 142.6934676173],
    [0.00000039938, 1.64490876502, 29.44876501211],
    [0.00000035504, 5.92626067208, 73.0533083755],
    [0.00000035998, 4.22663106168, 69.6087900794],
    [0.00000035709, 3.11698493448, 45.3328335552],
    [0.00000034365, 1.76540961765, 70.5719979259],
    [0.00000040938, 3.04417985538, 4.6972356084],
    [0.00000033246, 3.44251759587, 1059.6257476727],
    [0.00000034076, 3.89497875321, 137.2768416459],
    [0.00000034342, 4.51524705118, 5.6604434549],
    [0.0000003475, 4.57070962856, 120.1144321225],
    [0.00000029609, 2.74253950101, 134.8291610911],
    [0.00000029214, 5.902487642, 134.3415261241],
    [0.00000027728, 5.30138582803, 202.4972126576],
    [0.00000026015, 6.15906865719, 20.850745303],
    [0.00000025423, 2.61021717564, 23.81969071961],
    [0.0000002536, 0.40111355089, 60.04756252381],
    [0.00000027639, 5.35140184211, 152.2546951729],
    [0.00000024633, 3.55951058232, 59.55992755679],
    [0.00000026033, 2.49977137612, 235.6343134493],
    [0.00000022264, 0.49547833115, 76.0222537921],
    [0.00000020549, 0.87420485234, 138.2736793872],
    [0.00000022051, 5.5081336407, 33.3809182752],
    [0.00000019406, 1.90896040115, 159.36824217371],
    [0.0000002019, 6.02481724288, 70.35954960481],
    [0.00000022751, 3.81525392379, 110.189506272],
    [0.00000020572, 3.04462264934, 120.6020670895],
    [0.0000001901, 5.84440967288, 14.47091148511],
    [0.00000018238, 2.33410359218, 3.6883357796],
    [0.00000018044, 4.22469337938, 265.745475994],
    [0.00000018132, 4.2562095366, 90.0032695778],
    [0.00000018837, 1.79513158278, 79.6912824968],
    [0.00000017966, 0.73075101045, 73.3284950214],
    [0.00000017619, 0.8059939451, 76.72233708021],
    [0.00000015431, 1.05579242119, 1.24065522479],
    [0.00000017688, 5.64947491656, 41.4006802921],
    [0.00000015101, 3.31428797427, 16.9185920399],
    [0.00000015248, 4.50282713009, 3.42521122121],
    [0.00000014771, 1.52291283523, 333.4135275605],
    [0.00000014325, 4.50651618798, 19.8875374565],
    [0.00000013703, 1.03711862016, 116.18227885939],
    [0.00000015398, 5.26404040593, 162.3371875903],
    [0.00000013837, 1.24389395766, 433.9555553603],
    [0.00000013525, 0.24969551504, 144.39038864671],
    [0.00000015125, 3.90702018283, 147.3593340633],
    [0.00000015394, 3.1855082349, 41.3457985379],
    [0.00000013487, 3.9044503103, 347.6406215621],
    [0.00000017344, 2.71114683863, 190.9638774267],
    [0.00000012741, 5.20555748274, 419.72846135871],
    [0.00000015299, 6.02030544502, 184.97110483931],
    [0.00000014796, 1.4105244605, 113.15845168861],
    [0.00000011042, 5.60683409366, 25.516611749],
    [0.00000010803, 4.53729829502, 140.2457870625],
    [0.00000010475, 3.78319139464, 6.86972951729],
    [0.00000011185, 5.46980447272, 116.6699138264],
    [0.00000011147, 3.41565238019, 54.41848823131],
    [0.00000013346, 5.65327230364, 33.43580002939],
    [0.00000009592, 5.9399105768, 212.05844021321],
    [0.00000010605, 5.53671235012, 74.91354146621],
    [0.00000010593, 2.28899861007, 75.1372906354],
    [0.00000011833, 1.35549917067, 89.0400617313],
    [0.00000009674, 4.86901914741, 129.2000867986],
    [0.00000009261, 3.82300871178, 167.9662618828],
    [0.00000009431, 0.05576165559, 640.1411037975],
    [0.00000010948, 1.13466058909, 202.0095776906],
    [0.0000001047, 4.78808252913, 71.5688356672],
    [0.00000008486, 1.13985316911, 277.2788112249],
    [0.0000000914, 0.24006195765, 228.5207664485],
    [0.00000008941, 6.22720311602, 258.6319289932],
    [0.0000000814, 1.36707236754, 60.79832204921],
    [0.00000007518, 2.1531928704, 126.231141382],
    [0.00000007532, 3.27091826281, 89.2525100524],
    [0.00000007736, 1.43507903752, 272.85902299479],
    [0.00000008693, 5.98733781106, 221.61966776881],
    [0.00000006861, 1.71468974496, 195.38366565681],
    [0.00000008704, 2.06590461383, 50.9619078477],
    [0.00000007676, 1.61804051361, 58.3506414944],
    [0.00000007545, 4.29974248997, 53.93085326429],
    [0.00000007394, 1.31233396844, 95.6323438703],
    [0.00000006681, 3.85199580169, 66.9486612035],
    [0.00000006264, 0.42668844756, 39.6006933987],
    [0.00000007026, 0.33343091499, 51.44954281471],
    [0.0000000615, 3.23806032802, 374.15181032],
    [0.00000006356, 2.9503228433, 155.2236405895],
    [0.00000005982, 3.58571049504, 125.743506415],
    [0.00000006068, 5.1211700522, 135.5799206165],
    [0.00000006766, 6.24976890449, 151.5039356475],
    [0.00000007931, 1.61760247052, 288.32451148881],
    [0.00000006447, 1.38968353769, 297.8857390444],
    [0.00000006043, 5.4837163931, 1066.7392946735],
    [0.00000005769, 1.79748950801, 213.0552779545],
    [0.00000005884, 2.4611508691, 24.1352049047],
    [0.0000000576, 5.69510045876, 103.3365917021],
    [0.0000000589, 5.3926423631, 46.71424039951],
    [0.0000000618, 1.27388326507, 45.82046852221],
    [0.00000006347, 2.69417113124, 227.77000692311],
    [0.00000005285, 3.95688035619, 305.10235190919],
    [0.00000005176, 1.99189201991, 1052.51220067191],
    [0.00000005443, 3.22450673881, 471.9310244312],
    [0.00000005222, 5.30720065503, 124.5342203526],
    [0.00000005424, 2.95723327837, 91.70019060721],
    [0.00000005814, 2.93473998779, 340.52707456129],
    [0.00000005051, 2.69120338212, 515.70768857651],
    [0.00000004924, 5.88676032371, 404.2629728647],
    [0.00000005332, 1.01506659832, 83.1021708981],
    [0.00000005189, 3.53868828856, 61.01077037031],
    [0.00000005198, 5.63042873624, 486.1581184328],
    [0.00000004404, 1.90826090989, 171.8984151459],
    [0.00000005159, 5.75263925151, 383.0653442142],
    [0.00000004708, 3.95368562646, 110.45013870291],
    [0.00000004387, 1.58809682622, 209.6107596584],
    [0.00000004748, 4.37114817642, 98.6012892869],
    [0.00000004248, 2.87090902454, 230.3207533419],
    [0.00000005145, 0.08554898309, 74.0622082043],
    [0.00000004114, 0.30246244243, 2.20386307129],
    [0.00000005063, 1.42908457281, 75.98862389731],
    [0.0000000394, 4.34689430728, 55.38169607781],
    [0.00000004565, 2.3865311816, 223.20720634109],
    [0.00000003744, 4.87117996301, 43.5328466618],
    [0.0000000471, 4.97196354244, 186.4555775476],
    [0.0000000371, 0.16058312034, 94.6691360238],
    [0.00000003673, 1.11490595138, 80.65449034331],
    [0.00000003673, 3.56449648462, 69.3963417583],
    [0.00000003912, 4.67814184732, 183.85033042589],
    [0.00000003744, 5.65406090864, 155.53915477459],
    [0.00000004397, 4.53108005666, 902.19824401191],
    [0.0000000434, 4.96403760529, 131.16013238639],
    [0.000000036, 0.19066403657, 61.6920939265],
    [0.00000004967, 4.7958927854, 108.2173985967],
    [0.00000003476, 6.25374915743, 199.3158189199],
    [0.00000003658, 3.22126745009, 849.5080459724],
    [0.00000003523, 2.12357554923, 451.2210307477],
    [0.00000004488, 4.31357043065, 329.48137429739],
    [0.0000000398, 0.38853153974, 36.892380413],
    [0.00000003375, 1.20481404948, 415.3086731286],
    [0.0000000341, 3.45031076238, 4.2096006414],
    [0.00000003568, 1.36229272566, 446.06752933469],
    [0.00000004379, 0.32271955362, 145.35359649321],
    [0.00000003342, 3.88724158445, 295.4380584896],
    [0.0000000357, 4.47738872004, 50.6463936626],
    [0.00000003501, 3.7155645695, 460.2946233363],
    [0.00000003555, 1.60964374551, 397.14942586389],
    [0.00000003345, 4.80678644174, 544.1618765797],
    [0.00000003245, 2.89793765327, 428.32648106781],
    [0.00000003326, 3.77914879695, 354.75416856289],
    [0.00000003517, 0.78060011988, 204.9448932124],
    [0.00000003209, 4.56571924389, 237.4343003427],
    [0.00000003283, 0.0481375795, 32.48714639791],
    [0.00000003195, 4.70738042945, 1058.14127496441],
    [0.00000003291, 2.1813134119, 504.8050006645],
    [0.0000000321, 0.39206252877, 323.74923414091],
    [0.00000003632, 3.85767860548, 57.75994066341],
    [0.00000003617, 3.39977309184, 104.2303635794],
    [0.00000003794, 1.38786231377, 294.0566516453],
    [0.00000003164, 1.44848899722, 1819.3936486257],
    [0.00000003165, 2.08884519803, 216.72430665921],
    [0.00000003165, 2.08884519803, 216.2366716922],
    [0.00000003073, 3.61065539896, 41.8883152591],
    [0.00000003059, 0.63894095212, 905.64276230799],
    [0.00000003362, 0.98437506221, 85.58348134769],
    [0.00000003541, 2.12103995044, 956.53297345411],
    [0.00000003541, 4.0672220232, 191.45151239371],
    [0.0000000326, 1.97241696611, 227.557558602],
    [0.00000003047, 5.2209898424, 531.4192552864],
    [0.00000002983, 3.95282923476, 1589.3167127673],
    [0.00000003264, 0.96398524947, 336.5949212982],
    [0.00000003273, 5.11144966826, 60.3106870822],
    [0.00000003052, 3.159729821, 411.3765198655],
    [0.00000002957, 1.8158317133, 207.913838629],
    [0.00000003082, 0.29643336501, 217.4750661846],
    [0.00000003147, 4.43417661382, 1169.83206889211],
    [0.00000003055, 0.63724338409, 381.3684231848],
    [0.00000003006, 4.98412631966, 290.8752579076],
    [0.00000002859, 2.44491972, 276.79117625789],
    [0.00000002836, 4.4887384551, 88.35873817511],
    [0.0000000279, 4.32838387144, 62.0076081116],
    [0.00000003077, 3.15865718162, 109.0687318586],
    [0.00000002839, 0.15460003317, 942.3058794525],
    [0.00000002822, 4.85578631925, 128.7124518316],
    [0.00000003374, 1.30422404629, 736.1203310153],
    [0.00000002933, 3.80915533467, 306.58682461749],
    [0.00000002763, 0.71622637926, 1282.58913653029],
    [0.00000002895, 4.12741087597, 75.54668091261],
    [0.00000003459, 4.50182028789, 610.44852130189],
    [0.00000002886, 3.69498226849, 74.504151189],
    [0.00000002638, 5.32601609468, 198.0774244275],
    [0.00000002939, 1.02666459482, 179.9181771628],
    [0.00000002556, 6.01118563599, 430.02340209721],
    [0.00000002743, 2.25858432981, 141.9427080919],
    [0.00000002743, 5.4001769834, 141.4550731249],
    [0.00000002525, 2.72343515591, 219.171987214],
    [0.00000002654, 6.19077360752, 475.8631776943],
    [0.00000003424, 2.06036036899, 133.13224006171],
    [0.00000002448, 4.91178796797, 358.686321826],
    [0.00000002613, 1.99336437491, 1155.6049748905],
    [0.00000002428, 5.63773248138, 714.92270236481],
    [0.00000003038, 1.59738880832, 145.387226388],
    [0.00000002558, 1.72564085187, 460.8853241673],
    [0.00000002602, 5.68878295822, 4.9096839295],
    [0.00000002602, 5.27380478496, 145.1411481721],
    [0.00000002603, 2.43174340516, 343.4623900831],
    [0.00000003095, 0.25232061301, 269.6776292571],
    [0.00000003095, 3.3939132666, 270.1652642241],
    [0.00000002576, 5.00936607273, 988.0255428431],
    [0.00000002387, 3.4715400867, 346.43133549971],
    [0.00000002643, 4.88232673426, 376.7025567388],
    [0.0000000229, 0.3398892624, 275.3067035496],
    [0.00000003061, 1.44002014095, 606.5163680388],
    [0.00000002264, 2.40394452003, 323.2615991739],
    [0.00000002638, 2.36255398659, 77.7191748215],
    [0.00000002246, 0.84312304421, 143.9027536797],
    [0.00000002334, 3.6738841578, 49.26498681829],
    [0.00000002334, 3.6738841578, 49.75262178531],
    [0.00000002696, 5.85613797305, 70.08436295889],
    [0.00000002327, 4.63449299045, 479.044571432],
    [0.00000002398, 0.98432285449, 183.486632131],
    [0.0000000204, 2.84760871096, 1968.9568457603],
    [0.0000000204, 5.98920136455, 1969.4444807273],
    [0.0000000196, 1.00781809287, 894.5970620441],
    [0.0000000196, 1.00781809287, 895.0846970111],
    [0.00000002286, 4.41899075071, 147.83490694279],
    [0.00000002536, 0.04650659359, 108.70503356371],
    [0.00000001832, 1.44959489041, 379.8839504765],
    [0.00000001977, 4.60291692983, 5.1728084879],
    [0.00000002397, 0.29658529023, 114.6429243969],
    [0.0000000245, 2.97283648816, 203.9816853659],
    [0.00000002258, 0.46119788822, 201.01273994931],
    [0.00000001767, 1.86154901498, 1514.047479233],
    [0.00000001767, 1.86154901498, 1514.5351142],
    [0.00000001978, 3.70013905116, 2.7251279331],
    [0.00000001763, 1.99872322805, 275.7943385166],
    [0.00000001714, 0.43161832244, 440.43845504219],
    [0.00000001714, 3.57321097603, 440.9260900092],
    [0.0000000171, 2.3118361721, 309.0345051723],
    [0.0000000171, 5.45342882568, 309.5221401393],
    [0.00000001917, 1.47888149586, 6.1817083167],
    [0.00000001613, 2.25872913649, 1044.1602591787],
    [0.00000001613, 5.40032179008, 1044.6478941457],
    [0.00000001722, 0.04871363996, 752.8981714357],
    [0.00000001722, 0.04871363996, 753.3858064027],
    [0.00000001656, 5.52468183462, 21.84758304429],
    [0.00000002072, 2.95520838225, 203.49405039889],
    [0.00000001528, 6.14900289425, 106.5179854398],
    [0.00000001528, 6.14900289425, 106.0303504728],
    [0.00000001802, 2.29662739609, 344.45922782439],
    [0.00000001802, 5.43822004968, 344.9468627914],
    [0.0000000161, 5.48512651333, 266.233110961],
    [0.00000001509, 0.58599278635, 924.28964453971],
    [0.00000001509, 3.72758543994, 923.8020095727],
    [0.00000001727, 1.09473115664, 625.1632502705],
    [0.00000001727, 1.09473115664, 624.6756153035],
    [0.00000001491, 2.48436459152, 422.9098550964],
    [0.00000001491, 2.48436459152, 422.42222012939],
    [0.00000001766, 0.91839681059, 224.1009782184],
    [0.00000002006, 4.96835613839, 144.8659615262],
    [0.0000000147, 3.90791054506, 284.39235822571],
    [0.0000000147, 3.90791054506, 283.9047232587],
    [0.00000001482, 1.95911852464, 17.91542978119],
    [0.00000001585, 1.66951998253, 710.99054910171],
    [0.00000001585, 1.66951998253, 710.5029141347],
    [0.00000001415, 2.35106795911, 13.9832765181],
    [0.00000001408, 2.7774327079, 254.6997757301],
    [0.00000001408, 2.7774327079, 255.1874106971],
    [0.00000001517, 1.1158092074, 976.9798425792],
    [0.00000001517, 4.25740186099, 976.4922076122],
];

const Y3: &[Term] = &[
    [0.00000937647, 5.72127882108, 149.8070146181],
    [0.00000967548, 6.13791702385, 0.2438174835],
    [0.00000892089, 5.50847100342, 75.0254160508],
    [0.0000068466, 1.33373840136, 71.09326278771],
    [0.00000623727, 3.29206615194, 78.9575693139],
    [0.00000525597, 2.24127263936, 76.50988875911],
    [0.00000507791, 3.07030244888, 63.9797157869],
    [0.00000496551, 1.56839683755, 86.07111631471],
    [0.00000445874, 3.42824453385, 71.8440223131],
    [0.00000424392, 1.23311674112, 78.2068097885],
    [0.00000366041, 0.50676115568, 11.2895177474],
    [0.00000313023, 2.66852817813, 73.5409433425],
    [0.0000024903, 0.91068513695, 4.1759707466],
    [0.0000020915, 2.97973004445, 74.53778108379],
    [0.00000127465, 3.96938588107, 138.76131435421],
    [0.00000120647, 3.89796928399, 18.40306474821],
    [0.00000121784, 3.71922038147, 145.874861355],
    [0.00000078251, 1.91023640713, 224.5886131854],
    [0.00000084577, 1.90640096807, 2.9375762542],
    [0.00000050491, 0.78544030133, 131.6477673534],
    [0.00000045951, 4.6746056413, 151.2914873264],
    [0.00000046649, 5.26674809079, 56.8661687861],
    [0.00000048261, 1.36641385015, 22.3352180113],
    [0.00000034791, 5.714018769, 93.1846633155],
    [0.00000029328, 0.18214457213, 220.6564599223],
    [0.00000030594, 4.11017743079, 160.852714882],
    [0.00000025988, 5.82957254292, 153.73916788121],
    [0.00000020587, 1.4749858661, 206.42936592071],
    [0.00000018718, 1.86551335351, 82.13896305161],
    [0.00000018634, 2.78869413607, 67.91186905],
    [0.00000016697, 0.44407475674, 87.555589023],
    [0.00000020883, 4.85236834792, 84.5866436064],
    [0.00000020072, 6.1355284444, 65.46418849521],
    [0.00000015729, 4.26269482524, 522.8212355773],
    [0.00000015573, 3.18134712379, 537.0483295789],
    [0.00000019429, 3.33529843504, 127.71561409031],
    [0.00000014513, 3.12891080528, 52.446380556],
    [0.00000014273, 1.58794880516, 52.934015523],
    [0.00000017225, 5.94745172319, 146.6256208804],
    [0.00000014135, 1.26451572688, 77.9943614674],
    [0.00000013035, 0.29366962816, 72.05647063421],
    [0.00000014349, 4.35039068102, 148.32254190981],
    [0.00000009002, 3.16958165565, 97.11681657861],
    [0.00000008798, 6.09741460374, 56.3785338191],
    [0.00000008208, 4.25355573755, 62.4952430786],
    [0.00000007603, 5.85124809704, 152.9884083558],
    [0.0000000714, 1.53785661561, 194.89603068979],
    [0.00000006892, 5.82729490183, 80.65449034331],
    [0.00000006892, 5.13529284134, 69.3963417583],
    [0.00000006511, 5.12331075553, 45.3328335552],
    [0.00000006477, 0.46092149045, 209.12312469139],
    [0.00000005804, 4.85950876891, 70.6056278207],
    [0.00000005326, 4.23763472541, 127.22797912329],
    [0.00000005029, 5.67665029706, 149.3193796511],
    [0.00000005009, 0.3196296516, 297.9888049084],
    [0.00000005452, 0.04949420386, 72.577735496],
    [0.00000006294, 1.38143320816, 10.8018827804],
    [0.00000005251, 1.43610247201, 77.4730966056],
    [0.00000004684, 1.61331269521, 202.4972126576],
    [0.00000004291, 4.29965965111, 134.3415261241],
    [0.00000005421, 0.15265448442, 120.1144321225],
    [0.00000004058, 5.41850959774, 312.21589891],
    [0.00000003926, 1.77715565579, 59.55992755679],
    [0.00000004419, 5.50321844296, 69.6087900794],
    [0.0000000425, 2.24721757318, 80.44204202221],
    [0.00000004556, 5.8116939052, 29.44876501211],
    [0.00000003592, 1.55323340563, 199.3158189199],
    [0.00000003523, 2.2721285949, 636.2089505344],
    [0.00000003428, 3.23337096678, 621.98185653281],
    [0.00000003942, 2.26565174816, 3.21276290011],
    [0.0000000362, 2.07089246477, 3.42521122121],
    [0.00000003227, 3.93329666486, 3.6883357796],
    [0.00000003564, 1.4032434833, 70.35954960481],
    [0.00000003564, 0.13456629911, 79.6912824968],
    [0.00000003552, 5.20225660452, 426.8420083595],
    [0.00000003245, 2.48346002496, 611.8299281462],
    [0.0000000309, 3.84524306979, 486.1581184328],
    [0.00000003149, 4.80301298962, 471.9310244312],
    [0.00000002864, 5.9711431746, 272.85902299479],
    [0.00000003756, 1.8597689621, 258.6319289932],
    [0.00000002808, 4.70529986831, 647.25465079831],
    [0.0000000264, 0.64986508116, 288.32451148881],
    [0.00000002544, 1.96171476149, 76.0222537921],
    [0.0000000267, 4.35862114048, 375.9517972134],
    [0.00000002998, 5.42790043104, 76.72233708021],
    [0.00000002998, 2.39309465855, 73.3284950214],
    [0.00000003125, 0.36892549396, 408.68276109481],
    [0.0000000233, 5.58968397865, 433.9555553603],
    [0.00000002645, 5.17443993569, 120.6020670895],
    [0.00000002219, 4.57629057477, 390.9296507404],
    [0.00000002517, 5.76141273726, 213.5429129215],
    [0.00000002074, 5.00244199485, 63.49208081989],
    [0.00000001894, 3.26252512964, 213.0552779545],
    [0.00000001849, 1.0425060638, 134.8291610911],
    [0.00000001838, 0.86526030515, 73.0533083755],
    [0.00000002214, 5.11129905135, 1.7282901918],
    [0.00000001644, 3.0945506171, 384.3037387066],
    [0.00000001644, 6.23614327069, 383.81610373959],
    [0.00000001553, 3.95294824397, 462.2667310116],
    [0.00000001553, 3.95294824397, 461.77909604459],
    [0.00000001419, 4.20089846346, 422.9098550964],
    [0.00000001419, 4.20089846346, 422.42222012939],
    [0.00000001411, 3.36634095175, 9.8050450391],
    [0.00000001443, 3.56156060706, 195.38366565681],
    [0.00000001402, 2.89352085922, 984.8441491054],
    [0.00000001402, 6.03511351281, 984.35651413839],
];

const Y4: &[Term] = &[
    [0.00002203535, 2.21720684091, 75.0254160508],
    [0.0000012837, 2.43219641689, 0.2438174835],
    [0.00000072353, 4.29968795292, 149.8070146181],
    [0.00000030194, 5.08578675405, 63.9797157869],
    [0.00000030655, 5.78559557359, 86.07111631471],
    [0.00000016471, 2.0379116333, 18.40306474821],
    [0.00000016067, 0.96581112775, 76.50988875911],
    [0.00000016064, 0.31761628429, 73.5409433425],
    [0.00000010244, 4.72416199445, 74.53778108379],
    [0.00000006697, 2.54129200384, 131.6477673534],
    [0.00000007164, 1.87275979303, 1.7282901918],
    [0.00000006834, 0.81126784003, 56.8661687861],
    [0.00000004835, 4.01125413225, 11.2895177474],
    [0.00000005294, 3.82310032068, 93.1846633155],
    [0.00000003031, 4.80949177079, 71.09326278771],
    [0.00000002817, 3.00867557843, 78.9575693139],
    [0.00000002343, 4.78474509052, 220.6564599223],
    [0.00000002389, 2.30337242849, 283.9047232587],
    [0.00000002294, 4.60694198931, 365.6568564749],
    [0.00000002237, 3.22968908099, 206.42936592071],
    [0.00000001842, 3.85262135953, 138.76131435421],
    [0.00000002009, 0.58133348752, 224.5886131854],
    [0.00000001813, 5.67817174356, 148.32254190981],
];

const Y5: &[Term] = &[
    [0.00000016766, 2.31586625461, 75.0254160508],
    [0.00000001843, 4.54597723029, 0.2438174835],
];

const Z0: &[Term] = &[
    [0.25878127698, 2.61861272578, 74.7815985673],
    [0.01774318778, PI, 0.0],
    [0.00599316131, 5.08119500585, 149.5631971346],
    [0.0019028189, 1.61643841193, 76.2660712756],
    [0.00190881685, 0.57869575952, 73.297125859],
    [0.00084626761, 2.26030150166, 1.4844727083],
    [0.00030734257, 0.23571721555, 63.7358983034],
    [0.00020842052, 1.26054208091, 224.3447957019],
    [0.00019734273, 6.04314677688, 148.0787244263],
    [0.0001253753, 5.17169051466, 11.0457002639],
    [0.00014582864, 6.14852037212, 71.8126531507],
    [0.00010407529, 3.65320417038, 213.299095438],
    [0.00011261541, 3.55973769686, 529.6909650946],
    [0.00008855669, 4.03774505739, 151.0476698429],
    [0.0000823946, 0.34225652715, 77.7505439839],
    [0.00007950169, 0.72564903051, 85.8272988312],
    [0.00006867469, 0.81417174224, 2.9689454166],
    [0.0000564872, 3.45324719543, 138.5174968707],
    [0.00004581938, 1.69668682344, 38.1330356378],
    [0.00002578399, 5.1969644739, 111.4301614968],
    [0.0000296407, 6.14338802239, 35.1640902212],
    [0.00001884104, 2.61192472648, 78.7137518304],
    [0.00002330304, 5.7264022615, 70.8494453042],
    [0.00001985215, 0.76408839812, 39.6175083461],
    [0.00001743154, 1.20586281789, 146.594251718],
    [0.00002037011, 0.95353587037, 70.3281804424],
    [0.00001508924, 2.26195448553, 222.8603229936],
    [0.00001082736, 2.62872874057, 108.4612160802],
    [0.00001051968, 0.7556075384, 109.9456887885],
    [0.00000860142, 3.72285572975, 299.1263942692],
    [0.00000816182, 3.9530377946, 52.6901980395],
    [0.00000661249, 3.83459160939, 36.6485629295],
    [0.00000712421, 1.08343941878, 3.9321532631],
    [0.00000561959, 1.87601204328, 351.8165923087],
    [0.00000618657, 5.77033241076, 4.4534181249],
    [0.00000526378, 3.88178280084, 112.9146342051],
    [0.00000624327, 5.5599806336, 202.2533951741],
    [0.0000046413, 0.20598822419, 225.8292684102],
    [0.0000044811, 2.70547740286, 145.1097790097],
    [0.00000421562, 3.66721349765, 184.7272873558],
    [0.00000458133, 5.49113221489, 79.2350166922],
    [0.00000437386, 1.24892718921, 33.6796175129],
    [0.00000393617, 1.25018492386, 62.2514255951],
    [0.00000424721, 2.73945218102, 152.5321425512],
    [0.00000465359, 3.24015058631, 127.4717966068],
    [0.0000035045, 2.57788261436, 84.3428261229],
    [0.00000346833, 2.9126139462, 426.598190876],
    [0.00000375747, 3.20459646801, 160.6088973985],
    [0.00000313152, 1.32117543131, 145.6310438715],
    [0.00000284456, 1.70356835837, 22.0914005278],
    [0.00000265517, 2.67172684401, 74.6697239827],
    [0.00000258948, 4.12921582346, 12.5301729722],
    [0.00000274419, 3.90646620441, 1059.3819301892],
    [0.00000325409, 2.48214857847, 9.5612275556],
    [0.00000260666, 5.78699886075, 41.1019810544],
    [0.00000237721, 0.80288483705, 65.2203710117],
    [0.00000223998, 3.91250165407, 221.3758502853],
    [0.00000220626, 3.93529110558, 106.9767433719],
    [0.0000026521, 5.70721287265, 74.8934731519],
    [0.00000260727, 0.26432051819, 277.0349937414],
    [0.00000201268, 5.94906398723, 87.3117715395],
    [0.00000165472, 3.54108848226, 490.3340891794],
    [0.00000216763, 2.14355016573, 68.8437077341],
    [0.0000016651, 3.37208863092, 72.3339180125],
    [0.00000144942, 3.24374054293, 56.6223513026],
    [0.00000151752, 3.25335981894, 71.6002048296],
    [0.00000145795, 5.12147352849, 77.962992305],
    [0.00000155998, 5.19284812595, 77.2292791221],
    [0.00000123397, 2.06100256833, 186.2117600641],
    [0.0000012362, 1.96019194023, 288.0806940053],
    [0.00000100136, 2.82301109906, 114.3991069134],
    [0.00000095939, 4.72085119752, 297.6419215609],
    [0.0000009312, 2.91989514468, 181.7583419392],
    [0.0000009564, 3.53906186354, 220.4126424388],
    [0.00000109824, 3.74385247499, 67.6680515665],
    [0.00000085882, 5.10268841297, 153.4953503977],
    [0.00000087546, 5.06531594976, 183.2428146475],
    [0.0000010755, 1.08025777979, 340.7708920448],
    [0.00000081507, 4.03891440133, 143.6253063014],
    [0.00000072499, 1.26231939492, 75.3028634291],
    [0.00000080746, 0.64185046064, 206.1855484372],
    [0.00000066852, 5.37638250776, 265.9892934775],
    [0.00000061441, 1.93112217884, 18.1592472647],
    [0.00000062039, 4.48334461215, 66.70484372],
    [0.00000073016, 1.75514255931, 415.5524906121],
    [0.00000064039, 2.09527812031, 73.8183907208],
    [0.00000056535, 5.23288988461, 628.8515860501],
    [0.0000007029, 4.25243387975, 137.0330241624],
    [0.00000062161, 0.0124345136, 75.7448064138],
    [0.00000072251, 0.83002325085, 74.2603337055],
    [0.00000054171, 2.5694617229, 32.1951448046],
    [0.00000051593, 2.16146254563, 54.1746707478],
    [0.00000057081, 4.52969105049, 5.9378908332],
    [0.00000050182, 3.95193155421, 82.8583534146],
    [0.00000059321, 0.59787435734, 140.001969579],
    [0.00000048938, 3.50893151896, 7.1135470008],
    [0.00000046178, 0.49809404707, 131.4039498699],
    [0.00000046517, 3.03683183762, 59.8037450403],
    [0.0000004234, 3.04902220404, 218.4069048687],
    [0.0000003909, 6.1792633292, 373.9079928365],
    [0.000000434, 4.99216593131, 258.0244132148],
    [0.00000039572, 5.35887385465, 219.891377577],
    [0.000000349, 1.59769199954, 80.1982245387],
    [0.0000003492, 3.23679252932, 380.12776796],
    [0.00000036403, 1.98850437514, 81.8951455681],
    [0.00000040711, 3.59792341256, 522.5774180938],
    [0.00000032126, 3.27298565306, 191.2076949102],
    [0.00000034349, 5.21152504802, 105.4922706636],
    [0.00000032231, 3.61065476446, 20.6069278195],
    [0.00000036837, 3.48760382716, 96.8729990951],
    [0.00000030915, 4.60433376269, 42.5864537627],
    [0.00000028644, 5.75510160651, 259.5088859231],
    [0.00000028856, 1.34653259405, 74.5209661364],
    [0.00000028208, 4.6664232314, 159.1244246902],
    [0.00000029731, 4.37509990489, 80.7194894005],
    [0.00000029315, 5.03629852507, 51.2057253312],
    [0.00000025879, 3.05776566988, 8.0767548473],
    [0.00000026096, 5.4869124027, 74.8297826771],
    [0.00000025646, 2.63747057104, 300.6108669775],
    [0.0000002572, 2.42332626332, 305.3461693927],
    [0.00000025191, 6.16170714892, 99.1606209555],
    [0.00000026096, 2.89305157919, 74.7334144575],
    [0.00000025722, 4.26142211768, 180.2738692309],
    [0.0000002419, 5.50922979275, 74.9416572617],
    [0.00000026128, 0.13440940381, 835.0371344873],
    [0.00000025366, 0.26521632573, 536.8045120954],
    [0.00000024161, 5.19499722816, 227.3137411185],
    [0.00000027066, 3.36936938207, 554.0699874828],
    [0.00000029888, 1.80973859163, 3.1813937377],
    [0.00000025184, 1.53219969036, 154.0166152595],
    [0.00000029189, 2.7378667209, 479.2883889155],
    [0.00000026685, 2.98667762458, 14.977853527],
    [0.00000022295, 3.75337744344, 39.3568759152],
    [0.00000028696, 0.74986873597, 75.0422309982],
    [0.00000020972, 3.17916896424, 255.0554677982],
    [0.00000021014, 0.66302313851, 767.3690829208],
    [0.00000020577, 0.98634295841, 116.4260963429],
    [0.00000024248, 2.87116663203, 74.6215398729],
    [0.00000021752, 5.26140008123, 294.6729761443],
    [0.00000023545, 3.16204155741, 67.3592350258],
    [0.0000001943, 5.66067717228, 235.3904959658],
    [0.0000002222, 3.72262913359, 92.940845832],
    [0.00000021468, 5.59192826712, 2.4476805548],
    [0.00000016392, 0.73044725202, 142.4496501338],
    [0.0000001721, 0.87217558692, 404.5067903482],
    [0.0000001578, 5.95091393024, 296.1574488526],
    [0.00000018777, 0.60348363638, 211.8146227297],
    [0.00000015523, 1.7613816243, 41.6444977756],
    [0.00000017311, 0.80301716069, 187.6962327724],
    [0.00000016318, 3.13602300249, 28.3111756513],
    [0.00000015443, 2.76173273635, 14.0146456805],
    [0.00000014941, 1.86976831313, 203.7378678824],
    [0.00000013508, 1.11474597705, 984.6003316219],
    [0.00000014962, 4.21276743909, 454.9093665273],
    [0.00000013681, 2.06636726694, 639.897286314],
    [0.00000015178, 2.79287665181, 50.4025761791],
    [0.00000013092, 5.16479782395, 74.0308390419],
    [0.00000013024, 1.54167247979, 115.8835796217],
    [0.00000013756, 4.44130044058, 216.9224321604],
    [0.00000012912, 2.65544175682, 75.5323580927],
    [0.0000001456, 0.31573630495, 200.7689224658],
    [0.00000016675, 4.45252615374, 125.9873238985],
    [0.0000001375, 6.21844937284, 5.4166259714],
    [0.00000013992, 2.89612356381, 60.7669528868],
    [0.00000013034, 0.55043059925, 23.5758732361],
    [0.00000011409, 3.39650826181, 291.7040307277],
    [0.00000011138, 2.91935975246, 68.1893164283],
    [0.0000001185, 4.83551999164, 149.45132255],
    [0.00000011862, 5.50185243281, 331.3215390738],
    [0.00000012269, 2.11880702802, 162.0933701068],
    [0.00000011814, 5.31010267521, 142.1408335931],
    [0.00000010875, 0.14632073584, 128.9562693151],
    [0.00000010636, 3.41354811558, 286.596221297],
    [0.00000010932, 0.17212866351, 230.5645708254],
    [0.00000013012, 6.00108633545, 256.5399405065],
    [0.00000010662, 5.52797089925, 35.4247226521],
    [0.00000011802, 1.58760278423, 149.6750717192],
    [0.00000009878, 5.76116968524, 110.2063212194],
    [0.00000009583, 4.2674378862, 1589.0728952838],
    [0.00000011677, 2.40931590777, 81.0013736908],
    [0.00000009947, 4.00367169516, 760.25553592],
    [0.00000011956, 5.08786325344, 89.7594520943],
    [0.0000000914, 4.92826513743, 81.3738807063],
    [0.00000009041, 5.71300476219, 419.4846438752],
    [0.00000008569, 5.36608418229, 28.5718080822],
    [0.00000009334, 0.45928779675, 120.358249606],
    [0.00000009162, 3.71396614183, 362.8622925726],
    [0.00000008487, 1.7292401792, 24.3790223882],
    [0.00000007594, 6.10246512358, 103.0927742186],
    [0.00000009947, 5.60590635849, 68.5618234438],
    [0.00000007461, 2.32031732682, 905.8865797915],
    [0.00000008997, 2.37965677543, 195.1398481733],
    [0.00000008243, 4.74708765747, 316.3918696566],
    [0.00000007366, 6.15565920052, 135.5485514541],
    [0.00000007592, 0.05052252659, 69.3649725959],
    [0.00000009926, 4.65530352311, 88.7962442478],
    [0.00000007471, 5.67091902966, 367.9701020033],
    [0.0000000901, 5.15786385091, 692.5874843535],
    [0.00000006852, 5.42203185877, 146.3818033969],
    [0.00000006805, 3.79379417792, 214.7835681463],
    [0.00000007423, 0.10794595769, 293.188503436],
    [0.00000007905, 4.2587031675, 260.9933586314],
    [0.00000008094, 4.30080188984, 617.8058857862],
    [0.00000007684, 1.67030681336, 114.1384744825],
    [0.0000000762, 0.76643908895, 152.0108776894],
    [0.0000000624, 3.84416768971, 30.7106720963],
    [0.00000008334, 0.23758565081, 565.1156877467],
    [0.00000006097, 5.10863235559, 329.7251917809],
    [0.00000005988, 1.11565079117, 372.4235201282],
    [0.00000007252, 6.05773736503, 6.2197751235],
    [0.00000006028, 5.24025259251, 95.3885263868],
    [0.00000006289, 3.47252263966, 73.4090004436],
    [0.00000006, 5.61195390119, 157.6399519819],
    [0.00000005425, 1.81773059325, 647.0108333148],
    [0.00000005756, 0.60729000613, 45.5766510387],
    [0.00000005331, 0.57774785878, 462.0229135281],
    [0.00000005807, 2.22669544081, 358.9301393095],
    [0.00000005826, 5.23125320066, 284.1485407422],
    [0.00000006314, 0.18733033209, 10213.285546211],
    [0.00000006532, 3.68538415222, 278.5194664497],
    [0.00000005337, 2.55697146693, 543.0242872189],
    [0.00000005214, 3.23506131011, 7.4223635415],
    [0.00000005726, 0.79025128961, 483.2205421786],
    [0.00000006176, 4.09929403804, 328.3525936572],
    [0.00000006858, 5.69002837482, 141.4864422873],
    [0.00000005025, 2.82710574399, 152.7445908723],
    [0.0000000496, 3.86366490265, 46.2097904851],
    [0.00000005299, 0.28596890733, 0.9632078465],
    [0.00000004711, 1.04008534095, 1332.4847706675],
    [0.00000005322, 5.53930777799, 477.9157907918],
    [0.0000000456, 5.18525746864, 1215.1649024473],
    [0.00000004528, 5.38100183232, 983.1158589136],
    [0.0000000464, 1.37720813333, 121.2520214833],
    [0.00000004414, 5.22232716227, 909.8187330546],
    [0.00000004365, 2.15062971711, 611.5861106627],
];

const Z1: &[Term] = &[
    [0.03962262983, 4.12418900865, 74.7815985673],
    [0.00082241017, 0.33841633701, 149.5631971346],
    [0.00033563127, 2.12025871831, 73.297125859],
    [0.00039689344, 0.0, 0.0],
    [0.00026107421, 3.06937675063, 76.2660712756],
    [0.0001290864, 3.77705052097, 1.4844727083],
    [0.00003540856, 3.75158221944, 63.7358983034],
    [0.00002531606, 2.84542573949, 224.3447957019],
    [0.00003003205, 1.25505343184, 148.0787244263],
    [0.00001622011, 3.59519265641, 71.8126531507],
    [0.00001113725, 5.37716047615, 138.5174968707],
    [0.00001221565, 1.20355053543, 11.0457002639],
    [0.00001076837, 5.57432235156, 151.0476698429],
    [0.00000957872, 3.39246978049, 85.8272988312],
    [0.00000881547, 5.69920992505, 529.6909650946],
    [0.0000094201, 5.4070715397, 213.299095438],
    [0.00001015398, 1.70749191167, 77.7505439839],
    [0.00000762361, 4.44942686053, 78.7137518304],
    [0.00000861921, 2.56138068523, 2.9689454166],
    [0.00000414164, 3.67975318141, 70.8494453042],
    [0.00000468225, 3.85273975522, 38.1330356378],
    [0.000003122, 2.64302370891, 3.9321532631],
    [0.00000270537, 1.07042111099, 111.4301614968],
    [0.00000229316, 2.48137482804, 146.594251718],
    [0.00000211208, 5.63209083386, 35.1640902212],
    [0.00000206882, 3.77563841652, 222.8603229936],
    [0.00000226153, 2.76382998968, 39.6175083461],
    [0.00000152516, 1.15795669733, 65.2203710117],
    [0.00000143635, 2.29883148753, 109.9456887885],
    [0.00000137496, 1.27325091137, 52.6901980395],
    [0.00000126912, 4.98433527702, 71.6002048296],
    [0.00000091423, 5.37075683718, 299.1263942692],
    [0.00000078168, 3.30117226546, 77.962992305],
    [0.00000071984, 4.77848755964, 70.3281804424],
    [0.00000053505, 4.24118032837, 74.6697239827],
    [0.00000056461, 4.74607474496, 184.7272873558],
    [0.00000064129, 1.40401800165, 4.4534181249],
    [0.0000006019, 4.2556317254, 22.0914005278],
    [0.00000049324, 1.81501026461, 225.8292684102],
    [0.00000051044, 4.39586820753, 36.6485629295],
    [0.00000052135, 5.22811836344, 56.6223513026],
    [0.00000045079, 5.97279472842, 145.6310438715],
    [0.00000047486, 0.40482409134, 77.2292791221],
    [0.0000004202, 5.25755630615, 202.2533951741],
    [0.00000045284, 4.24607325536, 152.5321425512],
    [0.00000038647, 3.45355985008, 351.8165923087],
    [0.00000050009, 0.53909767456, 79.2350166922],
    [0.00000039778, 4.81127483225, 62.2514255951],
    [0.00000040898, 0.10596214023, 112.9146342051],
    [0.00000045145, 5.987124907, 160.6088973985],
    [0.0000003592, 2.1701324606, 127.4717966068],
    [0.00000031263, 0.58715748016, 153.4953503977],
    [0.00000031754, 2.8174507587, 277.0349937414],
    [0.0000003697, 2.35222730494, 206.1855484372],
    [0.00000031783, 4.79422665078, 221.3758502853],
    [0.00000036288, 0.8457634216, 33.6796175129],
    [0.00000028318, 6.06676080756, 426.598190876],
    [0.00000029023, 1.00910858838, 75.7448064138],
    [0.00000025619, 1.75329899148, 220.4126424388],
    [0.00000028552, 5.54335981183, 67.6680515665],
    [0.00000025386, 5.13375412515, 84.3428261229],
    [0.00000025695, 1.62197123657, 41.1019810544],
    [0.00000027612, 0.99170994448, 74.8934731519],
    [0.00000020608, 2.21883575454, 131.4039498699],
    [0.00000024067, 4.33103426983, 9.5612275556],
    [0.00000023899, 2.43498266206, 87.3117715395],
    [0.00000023625, 6.27443196421, 18.1592472647],
    [0.00000024706, 0.26779002293, 12.5301729722],
    [0.00000024563, 0.18402440195, 3.1813937377],
    [0.00000019905, 3.48825148521, 186.2117600641],
    [0.00000015547, 0.20397814976, 137.0330241624],
    [0.00000015494, 4.31583400109, 288.0806940053],
    [0.00000013835, 0.02174450243, 81.8951455681],
    [0.00000013597, 0.15357754975, 297.6419215609],
    [0.00000013359, 3.17889804773, 80.1982245387],
    [0.00000013294, 3.87688117315, 145.1097790097],
    [0.00000017024, 1.8142810996, 73.8183907208],
    [0.00000014748, 0.03189985172, 66.70484372],
    [0.00000012232, 2.64378420008, 75.3028634291],
    [0.00000011124, 5.08426227737, 490.3340891794],
    [0.00000012563, 1.82692572459, 140.001969579],
    [0.00000013411, 5.39551143522, 522.5774180938],
    [0.00000012192, 2.21125075603, 74.2603337055],
    [0.00000011266, 0.79673017651, 340.7708920448],
    [0.0000000959, 6.09094318692, 96.8729990951],
    [0.00000009224, 2.14550163776, 7.1135470008],
    [0.00000008877, 0.46929853551, 2.4476805548],
    [0.00000009874, 5.7957254018, 183.2428146475],
    [0.00000010128, 5.09593396273, 114.3991069134],
    [0.00000008837, 4.70446704205, 14.977853527],
    [0.00000009469, 6.21249255999, 108.4612160802],
    [0.00000007547, 5.32002357346, 82.8583534146],
    [0.0000000756, 4.69622310205, 536.8045120954],
    [0.0000000755, 4.37352817861, 415.5524906121],
    [0.000000078, 1.81108816316, 92.940845832],
    [0.00000008448, 5.75611469277, 1059.3819301892],
    [0.00000008261, 2.8086169752, 72.3339180125],
    [0.00000008096, 6.27869649292, 5.9378908332],
    [0.00000006564, 1.27991694625, 373.9079928365],
    [0.00000005973, 3.96626028042, 617.8058857862],
    [0.00000005775, 2.43822838062, 142.4496501338],
    [0.00000005356, 4.89393300983, 41.6444977756],
    [0.00000007123, 5.82803873586, 191.2076949102],
    [0.00000006074, 1.61805362044, 305.3461693927],
    [0.00000005023, 1.26471022025, 703.6331846174],
    [0.00000004868, 0.30672295767, 33.1371007917],
    [0.00000004986, 4.65490725829, 195.1398481733],
    [0.00000005616, 2.21173751117, 32.1951448046],
    [0.00000004445, 4.80807045815, 20.6069278195],
    [0.00000005055, 5.34765264557, 80.7194894005],
    [0.00000004398, 0.49529839431, 74.8297826771],
    [0.00000004398, 4.18462288684, 74.7334144575],
    [0.00000004853, 2.63817804331, 74.5209661364],
    [0.00000004836, 2.04143912495, 75.0422309982],
    [0.00000005022, 0.61491281306, 259.5088859231],
    [0.00000004288, 3.92852240171, 300.6108669775],
    [0.00000004371, 6.00527473515, 159.1244246902],
    [0.00000004091, 4.16218259902, 74.6215398729],
    [0.00000004076, 0.51761494342, 74.9416572617],
    [0.00000005085, 0.47739127862, 181.7583419392],
    [0.00000004223, 0.10445996392, 42.5864537627],
    [0.00000004941, 2.80437422101, 479.2883889155],
    [0.00000003301, 4.32752251719, 116.4260963429],
    [0.00000004284, 2.75000237791, 154.0166152595],
    [0.00000004073, 0.16290844853, 227.3137411185],
    [0.00000003569, 5.93367812903, 219.891377577],
    [0.00000002877, 0.92771324396, 404.5067903482],
    [0.00000003606, 4.15115668974, 39.3568759152],
    [0.0000000293, 5.67425699047, 68.8437077341],
    [0.00000003216, 0.72597245494, 235.3904959658],
    [0.00000002349, 1.20639876458, 5.4166259714],
    [0.00000002291, 0.45375065997, 74.0308390419],
    [0.0000000277, 1.84988185963, 211.8146227297],
    [0.00000002264, 4.2264078889, 75.5323580927],
    [0.00000002775, 2.27306099902, 187.6962327724],
    [0.00000003034, 3.74888989756, 380.12776796],
    [0.00000002614, 0.46579056125, 128.9562693151],
    [0.00000002608, 0.85101218281, 296.1574488526],
    [0.00000002641, 5.51157783762, 230.5645708254],
    [0.00000002427, 0.21201331744, 835.0371344873],
    [0.00000002706, 0.68084398426, 99.1606209555],
    [0.000000027, 4.01778306134, 50.4025761791],
    [0.00000002306, 1.00290501307, 35.4247226521],
    [0.00000002095, 5.76874685766, 54.1746707478],
    [0.00000001942, 4.4900456103, 68.1893164283],
    [0.00000002068, 0.12254293382, 149.45132255],
    [0.00000002666, 0.45683512473, 110.2063212194],
    [0.00000001945, 6.21758865027, 89.7594520943],
    [0.00000002386, 3.96907647535, 14.0146456805],
    [0.00000001896, 5.3443710596, 59.8037450403],
    [0.00000002065, 3.15839878322, 149.6750717192],
    [0.00000001777, 4.00647819013, 265.9892934775],
    [0.00000002209, 0.64028748776, 218.4069048687],
    [0.00000002162, 1.24773830053, 106.9767433719],
    [0.00000002023, 1.82007872482, 23.5758732361],
    [0.00000002035, 0.51927845768, 200.7689224658],
    [0.00000001504, 0.25796780548, 81.3738807063],
    [0.0000000196, 3.46041862039, 162.0933701068],
    [0.00000001414, 2.99649402595, 51.2057253312],
];

const Z2: &[Term] = &[
    [0.00177117836, 5.80022816704, 74.7815985673],
    [0.0001603566, 0.0, 0.0],
    [0.0000275573, 2.1767684875, 149.5631971346],
    [0.00001828256, 3.84635676237, 73.297125859],
    [0.0000086851, 4.878972324, 76.2660712756],
    [0.00000572523, 5.46404733048, 1.4844727083],
    [0.00000285628, 5.08160639995, 63.7358983034],
    [0.00000157189, 0.91294082225, 138.5174968707],
    [0.00000152299, 6.26275017065, 78.7137518304],
    [0.00000141686, 2.84004707284, 148.0787244263],
    [0.00000093961, 3.52447729329, 11.0457002639],
    [0.00000092321, 5.16432077685, 71.8126531507],
    [0.0000006547, 0.0015366266, 85.8272988312],
    [0.00000066123, 4.2340526086, 3.9321532631],
    [0.00000059402, 5.03486983197, 224.3447957019],
    [0.00000050738, 0.41363094297, 71.6002048296],
    [0.00000039303, 1.43398963413, 529.6909650946],
    [0.00000041691, 0.60405160402, 213.299095438],
    [0.00000028845, 4.32177165196, 2.9689454166],
    [0.00000024452, 1.45233443794, 151.0476698429],
    [0.00000022558, 3.68734701846, 77.7505439839],
    [0.00000020948, 5.56707525527, 38.1330356378],
    [0.00000018328, 1.52738789991, 77.962992305],
    [0.0000001405, 4.092915711, 146.594251718],
    [0.00000012166, 2.77134894443, 111.4301614968],
    [0.00000012047, 3.14714635296, 65.2203710117],
    [0.00000010691, 4.20068087609, 35.1640902212],
    [0.00000008575, 1.32099488216, 70.8494453042],
    [0.00000008712, 3.9678290827, 109.9456887885],
    [0.00000008425, 2.12601661788, 56.6223513026],
    [0.00000009384, 5.0139176729, 3.1813937377],
    [0.00000007268, 5.60415789247, 127.4717966068],
    [0.0000000711, 3.80523625157, 454.9093665273],
    [0.00000007227, 5.55318237104, 222.8603229936],
    [0.00000006941, 0.53699361276, 22.0914005278],
    [0.00000007547, 4.53131604233, 39.6175083461],
    [0.00000007103, 3.99578891327, 52.6901980395],
    [0.00000006166, 6.23459907887, 70.3281804424],
    [0.00000005037, 2.7566373117, 12.5301729722],
    [0.00000005681, 2.88511085602, 160.6088973985],
    [0.00000004463, 4.73686825389, 87.3117715395],
    [0.00000004239, 1.56497120608, 9.5612275556],
    [0.00000004139, 5.80700510713, 74.6697239827],
    [0.00000004953, 1.62290961095, 84.3428261229],
    [0.00000003989, 3.71609335244, 18.1592472647],
    [0.00000005068, 1.82574036051, 77.2292791221],
    [0.00000004044, 3.72554698482, 202.2533951741],
    [0.00000003751, 2.22353174536, 153.4953503977],
    [0.000000037, 2.2641693816, 75.7448064138],
    [0.0000000367, 2.32544430817, 145.6310438715],
    [0.00000003643, 2.14599111308, 299.1263942692],
    [0.00000003263, 2.75844544119, 73.8183907208],
    [0.00000002446, 6.17908901556, 62.2514255951],
    [0.00000002232, 6.26646620658, 220.4126424388],
    [0.00000002529, 3.41304662369, 131.4039498699],
    [0.00000002669, 6.01785430306, 184.7272873558],
    [0.00000001937, 4.88080111657, 225.8292684102],
    [0.00000002394, 6.16425420001, 72.3339180125],
    [0.00000001693, 3.21375560117, 92.940845832],
    [0.0000000173, 0.61525482065, 36.6485629295],
    [0.00000001868, 5.20707362099, 145.1097790097],
    [0.00000001707, 4.36686229005, 206.1855484372],
    [0.00000001555, 2.47637875795, 426.598190876],
    [0.00000001473, 4.91621635684, 80.1982245387],
    [0.00000001409, 3.59004232634, 4.4534181249],
];

const Z3: &[Term] = &[
    [0.00005141166, 1.25274291045, 74.7815985673],
    [0.00000316609, PI, 0.0],
    [0.00000065271, 5.77590506888, 73.297125859],
    [0.00000059071, 4.00961080499, 149.5631971346],
    [0.00000034006, 1.04273395751, 63.7358983034],
    [0.00000023565, 1.66204476861, 78.7137518304],
    [0.00000020797, 0.28508462597, 76.2660712756],
    [0.00000017194, 0.82951296239, 1.4844727083],
    [0.00000012086, 2.51385690941, 138.5174968707],
    [0.00000012289, 1.87238784591, 71.6002048296],
    [0.00000006582, 5.70015947451, 3.9321532631],
    [0.00000004929, 4.05567973712, 85.8272988312],
    [0.00000003901, 0.60406901282, 71.8126531507],
    [0.00000004647, 4.4131291907, 148.0787244263],
    [0.00000003312, 4.65337102453, 70.8494453042],
    [0.00000003697, 2.79328856468, 11.0457002639],
    [0.00000001714, 5.43238781955, 145.6310438715],
    [0.00000001496, 5.73048296712, 18.1592472647],
];

const Z4: &[Term] = &[
    [0.00000109765, 2.85499529315, 74.7815985673],
    [0.0000000789, PI, 0.0],
    [0.00000002125, 2.9470605374, 63.7358983034],
    [0.00000002092, 1.68142886919, 73.297125859],
    [0.00000001559, 5.50762023733, 149.5631971346],
    [0.00000001558, 1.27604541567, 70.8494453042],
];

pub static URANUS: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
