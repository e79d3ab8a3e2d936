//! VSOP87 elliptic elements of Mercury: a, λ, k, h, q, p on the ecliptic and equinox J2000.

use std::f64::consts::PI;

use super::super::{EllipticTable, Term};

const A0: &[Term] = &[
    [0.38709830982, 0.0, 0.0],
    [0.00000073228, 2.53513583698, 5661.3320491522],
    [0.00000036456, 6.22386583494, 1109.3785520934],
    [0.00000037683, 2.45490822298, 31749.2351907264],
    [0.00000023602, 3.72473607561, 21535.9496445154],
    [0.0000001966, 5.68113677881, 4551.9534970588],
    [0.00000020728, 1.32827421467, 51116.4243529592],
    [0.00000013546, 4.97902475233, 11322.6640983044],
    [0.00000014165, 1.42281169226, 25028.521211385],
    [0.00000012791, 5.37700281723, 13521.7514415914],
    [0.00000014651, 3.69143283588, 47623.8527860896],
    [0.00000012149, 6.21382919637, 26087.9031415742],
    [0.00000011645, 4.95481168697, 37410.5672398786],
    [0.00000013008, 1.2220620471, 15874.6175953632],
    [0.00000012974, 5.29656774187, 39609.6545831656],
    [0.00000006221, 6.21118292992, 27197.2816936676],
    [0.00000005811, 6.18731654615, 53285.1848352418],
    [0.00000005264, 5.50207451816, 57837.1383323006],
    [0.00000005464, 4.93135676217, 63498.47038145279],
    [0.00000003991, 1.6512158789, 33326.5787331742],
    [0.00000004223, 4.36499294171, 77204.32749453338],
    [0.00000003485, 1.16048270278, 43071.8992890308],
    [0.00000003171, 1.17728037522, 16983.9961474566],
    [0.00000003553, 0.45247601886, 73711.75592766379],
    [0.00000002959, 4.19097944416, 955.5997416086],
    [0.00000002788, 1.56027552002, 7238.6755916],
    [0.00000003724, 1.67851861491, 59414.4818747484],
    [0.00000003198, 0.62671946873, 50586.73338786459],
    [0.00000002808, 1.13936337184, 69159.80243060499],
    [0.00000003048, 2.63573596639, 19804.8272915828],
    [0.00000002267, 2.41998015566, 6770.7106012456],
    [0.00000001965, 2.39390563534, 58946.51688439399],
    [0.00000002178, 2.06509742001, 65697.55772473979],
    [0.00000002285, 0.9003547438, 24498.8302462904],
    [0.00000002057, 1.68440640522, 89586.37352302698],
    [0.0000000172, 2.41203775358, 32858.61374281979],
    [0.00000001549, 4.70233320281, 76674.63652943878],
    [0.00000001557, 4.30287158507, 53131.406024757],
    [0.00000001849, 6.18329281134, 79373.087976816],
    [0.00000001286, 4.44296589379, 14765.2390432698],
    [0.000000013, 1.17404713484, 41962.5207369374],
    [0.00000001294, 2.37830023262, 85034.42002596818],
    [0.00000001045, 3.64630906049, 48733.23133818299],
    [0.00000001078, 3.62872329654, 74821.13447975718],
    [0.00000001087, 4.29160240715, 25558.2121764796],
    [0.00000001092, 1.96436366982, 9103.9069941176],
    [0.00000001187, 5.76822070953, 3442.5749449654],
    [0.00000000973, 2.33459863564, 83925.0414738748],
    [0.0000000093, 4.25546676431, 27043.5028831828],
    [0.00000001078, 2.9180860035, 105460.99111839019],
    [0.00000001019, 4.72467766192, 85502.38501632259],
    [0.00000001063, 2.63729944924, 52175.8062831484],
    [0.00000000858, 1.12683882461, 103292.23063610759],
    [0.00000000818, 3.54908242952, 99799.65906923798],
    [0.00000000815, 3.65843058738, 22645.32819660879],
    [0.00000001038, 4.34837114037, 79219.3091663312],
    [0.00000000986, 0.77833853451, 51749.20809227239],
    [0.00000000637, 4.88079928733, 64607.84893354619],
    [0.00000000665, 0.86662663613, 25661.3049506982],
    [0.00000000585, 4.77045229206, 115674.27666460119],
    [0.00000000694, 6.13623999939, 2218.7571041868],
    [0.0000000057, 4.86544911082, 90695.75207512038],
    [0.0000000059, 0.67691665898, 72936.23331633979],
    [0.00000000538, 4.68785654601, 51646.11531805379],
    [0.00000000561, 3.62297832557, 100909.03762133139],
    [0.0000000049, 4.8949004095, 38519.945791972],
    [0.00000000519, 4.15465164783, 121335.60871375339],
    [0.00000000427, 0.62867886289, 46848.3301747656],
    [0.00000000426, 5.16500244659, 91785.46086631398],
    [0.00000000402, 5.1412268295, 36301.18868778519],
    [0.00000000506, 1.18841292932, 95247.70557217918],
    [0.00000000379, 6.11598648332, 80482.46652890938],
    [0.00000000443, 4.89979084789, 12432.0426503978],
    [0.00000000377, 5.99613417454, 131548.89425996438],
    [0.00000000419, 1.09989325019, 105307.21230790539],
    [0.00000000439, 1.58301440604, 102762.53967101299],
    [0.00000000375, 2.57786507047, 45892.73043315699],
    [0.00000000316, 6.13055268504, 54394.56338733519],
    [0.00000000343, 6.18817035962, 50057.04242277],
    [0.00000000289, 6.10480907535, 106570.36967048359],
    [0.00000000307, 4.22337275223, 76144.94556434419],
    [0.00000000249, 1.52705284042, 111590.2881578968],
    [0.00000000249, 5.83752225954, 78263.70942472259],
    [0.00000000317, 2.70430026788, 45494.58142974879],
    [0.00000000218, 1.06907061135, 96357.08412427259],
    [0.00000000223, 0.941586847, 147423.51185532758],
    [0.00000000272, 0.75133398951, 99024.13645791399],
    [0.00000000255, 2.84675794272, 19406.6782881746],
    [0.00000000205, 0.56690311385, 20760.4270331914],
    [0.00000000229, 5.39611781613, 137210.22630911658],
    [0.00000000196, 5.40064172203, 110012.94461544899],
    [0.00000000203, 1.08284682339, 70269.18098269838],
    [0.00000000193, 3.28588016681, 66653.15746634839],
    [0.00000000215, 3.33885240455, 92741.06060792258],
    [0.00000000189, 0.33969146489, 125887.56221081219],
    [0.00000000252, 0.37713475012, 23969.1392811958],
    [0.00000000224, 4.87804518001, 116783.65521669458],
    [0.00000000222, 6.13942635318, 28306.66024576099],
    [0.00000000182, 4.17455280089, 129380.13377768178],
    [0.00000000202, 3.83175039682, 77837.11123384659],
    [0.00000000189, 0.49099588892, 26617.5941066688],
    [0.00000000154, 1.5629098332, 141762.17980617538],
    [0.00000000159, 3.21763686464, 24978.5245894808],
    [0.00000000144, 1.87222795849, 42153.969003049],
    [0.0000000016, 3.76216952994, 125112.03959948818],
    [0.00000000139, 1.06479224645, 122444.98726584678],
    [0.00000000165, 1.58926418756, 51535.90899683439],
    [0.00000000142, 3.48673976168, 68050.42387851159],
    [0.00000000128, 2.31859393882, 86143.79857806159],
    [0.00000000122, 1.81796931433, 102232.84870591838],
    [0.00000000123, 3.94694338137, 32370.9789915656],
    [0.00000000121, 2.30685172571, 112231.70171963578],
    [0.00000000126, 4.17626518853, 131395.11544947958],
    [0.00000000143, 1.09394595029, 44181.27784112419],
    [0.00000000123, 2.17286829085, 163298.1294506908],
    [0.00000000113, 2.78813477997, 157636.79740153858],
    [0.00000000111, 2.19371068487, 16066.0658614748],
    [0.000000001, 3.2283473331, 40565.2543247742],
    [0.00000000122, 1.65227935236, 25448.00585526019],
    [0.00000000121, 0.73546864763, 19317.1925403286],
    [0.00000000118, 4.57325096063, 51109.31080595839],
    [0.00000000116, 1.19849917575, 51123.53789995999],
    [0.00000000089, 1.96169595224, 117873.36400788819],
    [0.00000000109, 4.67214230702, 128850.44281258718],
    [0.00000000107, 1.09665867826, 18093.37469954999],
    [0.00000000084, 5.94488790723, 86457.98475793119],
    [0.00000000096, 2.33067916793, 60055.89543648739],
    [0.00000000098, 1.44960108674, 77734.01845962799],
    [0.0000000009, 0.36410714505, 153084.84390447979],
    [0.00000000081, 3.94500881982, 46514.4742339962],
    [0.00000000077, 4.01506619192, 173511.41499690176],
    [0.00000000078, 3.55494735645, 102018.41617342478],
    [0.00000000079, 1.28260871039, 25035.6347583858],
    [0.00000000066, 5.85952359206, 2333.196392872],
    [0.00000000071, 2.33295897966, 7880.08915333899],
    [0.00000000075, 6.00652893147, 112545.88789950538],
    [0.00000000065, 3.5466946882, 128106.31931499895],
    [0.00000000065, 2.62083643429, 104351.61256629678],
    [0.00000000066, 2.79913585033, 111122.32316754239],
    [0.00000000078, 6.15667266878, 132658.27281205778],
    [0.00000000081, 4.66156113851, 25021.4076643842],
    [0.00000000076, 4.53756600425, 13655.8604911764],
    [0.00000000064, 3.40708233225, 179172.74704605396],
    [0.00000000063, 2.31389749168, 138319.60486120995],
    [0.0000000006, 4.60581097709, 137678.191299471],
    [0.00000000074, 2.66417117344, 5327.4761083828],
    [0.00000000061, 5.23179314971, 27147.28507176339],
    [0.00000000058, 0.54668661186, 151199.94274106238],
    [0.00000000067, 4.47280531944, 77623.81213840858],
    [0.00000000065, 3.56701574242, 75930.51303185058],
    [0.00000000063, 3.47481127399, 118828.96374949679],
    [0.00000000058, 0.11304572477, 126996.94076290558],
    [0.0000000005, 4.53016884623, 71980.63357473118],
    [0.00000000062, 5.65354923687, 71582.48457132299],
    [0.00000000057, 0.14672352518, 144916.86689107097],
    [0.00000000051, 5.8881940532, 60370.08161635699],
    [0.00000000054, 0.538841796, 68241.8721446232],
    [0.00000000049, 5.24360598086, 189386.03259226496],
    [0.00000000052, 2.05685097746, 7994.5284420242],
    [0.00000000062, 1.50086386071, 142871.55835826878],
    [0.00000000062, 2.33712241753, 33967.99229491319],
    [0.00000000053, 4.80771120945, 22747.2907148744],
    [0.00000000046, 4.79222598509, 117893.03376878797],
    [0.00000000044, 3.41166204906, 151975.46535238638],
    [0.00000000044, 2.45905989851, 467.9649903544],
    [0.00000000041, 2.18914718714, 136100.84775702318],
    [0.0000000004, 0.94025805082, 155468.036919256],
    [0.00000000046, 1.02817190787, 38813.3565763492],
    [0.00000000041, 0.60080303915, 103925.01437542078],
    [0.0000000004, 4.63563492749, 167850.0829477496],
    [0.00000000047, 3.15374189807, 14477.3511832],
    [0.00000000041, 5.10211496938, 128320.75184749259],
    [0.00000000042, 3.60151691012, 75615.25459924959],
    [0.00000000037, 6.22169026833, 64901.25971792339],
    [0.00000000042, 4.80335027038, 91805.13062721379],
    [0.00000000035, 2.32310827912, 106262.81204951399],
    [0.00000000034, 0.96959894718, 157483.01859105378],
    [0.00000000036, 1.20212596612, 38654.05484155699],
    [0.00000000033, 4.78939649592, 143980.93691036216],
    [0.00000000042, 3.57576966506, 49842.60989027639],
    [0.00000000043, 2.77809269893, 158746.17595363196],
    [0.00000000032, 5.86112923799, 183724.7005431128],
    [0.00000000031, 4.6451963138, 195047.36464141717],
    [0.00000000029, 0.19061546318, 205260.65018762814],
    [0.00000000031, 5.45579743824, 49527.35145767539],
    [0.00000000039, 1.89008690406, 50483.640613646],
    [0.00000000031, 3.25121686976, 25874.6040461362],
    [0.00000000029, 1.64098146077, 168959.46149984296],
    [0.00000000027, 1.50204798366, 101703.15774082378],
    [0.00000000035, 1.51981389143, 12725.453434775],
    [0.00000000028, 3.57682645017, 23754.70674870219],
    [0.00000000027, 6.03077820275, 133767.65136415116],
    [0.00000000027, 3.57332638575, 154194.22245657316],
    [0.00000000026, 1.45863229838, 154938.34595416137],
    [0.00000000025, 2.26478597655, 80174.90890793978],
    [0.00000000025, 3.20410591741, 171004.7700326452],
    [0.00000000024, 0.80457365987, 199599.31813847594],
    [0.00000000027, 6.03998316601, 107679.74822257696],
    [0.00000000023, 1.6334448451, 50593.84693486539],
    [0.0000000003, 4.81338056088, 65717.22748563958],
    [0.00000000027, 1.99963676494, 24395.7374720718],
    [0.0000000003, 3.19524012843, 51962.5071877104],
    [0.00000000025, 2.39890579141, 132350.71519108818],
    [0.00000000024, 1.26839146935, 77197.21394753258],
    [0.00000000027, 3.90300888193, 50579.61984086379],
    [0.00000000026, 1.69022715503, 153.7788104848],
    [0.00000000019, 5.03634727096, 143961.2671494624],
    [0.00000000019, 1.77005811743, 24505.94379329119],
    [0.00000000024, 4.23923219613, 77211.44104153418],
    [0.00000000018, 3.62005225138, 177287.84588263658],
    [0.00000000023, 2.00205995031, 35191.8101356918],
    [0.00000000022, 5.82118677812, 34282.1784747828],
    [0.00000000024, 4.03735601034, 174620.79354899516],
    [0.00000000017, 5.70721212453, 130439.51570787099],
    [0.00000000023, 6.14009890279, 23439.44831610119],
    [0.00000000018, 6.16422623668, 62389.09182935939],
    [0.00000000019, 2.82253311002, 164721.69418265377],
    [0.00000000019, 2.45045616321, 51322.60990139639],
    [0.00000000018, 4.81792922076, 39629.32434406539],
    [0.00000000017, 6.04580228349, 3328.13565628019],
    [0.00000000016, 1.42267288118, 221135.26778299137],
    [0.00000000017, 2.03225228149, 215473.93573383917],
    [0.00000000016, 6.03623427219, 159855.55450572536],
    [0.00000000022, 0.30107199134, 94138.32702008578],
    [0.00000000017, 1.20573462268, 103711.71527998279],
    [0.0000000002, 6.05045749314, 81591.84508100279],
    [0.00000000018, 0.31361150357, 2199.087343287],
    [0.00000000021, 1.23292225529, 148532.89040742096],
    [0.00000000018, 5.7970376245, 29530.4780865396],
    [0.00000000015, 4.81305016751, 13541.42120249119],
    [0.00000000017, 0.99400172263, 123554.36581794015],
    [0.00000000015, 0.98785442943, 149642.26895951436],
    [0.0000000002, 4.17229625164, 24491.71669928959],
    [0.00000000014, 1.39741956334, 163766.0944410452],
    [0.00000000019, 4.50191323695, 103821.92160120218],
    [0.00000000016, 5.45432237133, 61560.64729122359],
    [0.00000000014, 4.98754247204, 126067.63934109679],
    [0.00000000016, 4.90143923459, 76681.75007643958],
    [0.00000000017, 3.62212990325, 94329.77528619739],
    [0.00000000014, 3.7431160332, 50696.93970908399],
    [0.00000000014, 5.88947442519, 210921.98223678037],
    [0.00000000018, 4.12568517666, 52026.2430860138],
    [0.00000000014, 2.62340690265, 19.66976089979],
    [0.00000000013, 0.17545663456, 35472.7441496494],
    [0.00000000013, 6.05732026635, 55503.94193942859],
    [0.00000000012, 2.69837300857, 52705.49724824299],
    [0.00000000013, 1.67411797837, 76667.52298243798],
    [0.00000000012, 4.92532385835, 99979.7361995226],
    [0.00000000013, 2.67492924802, 51013.33157874059],
    [0.00000000013, 2.37925355593, 97670.38771289718],
    [0.00000000014, 0.90085660646, 51742.09454527159],
    [0.00000000014, 3.79909239592, 51756.3216392732],
    [0.00000000015, 2.47623276413, 25234.70675982219],
    [0.00000000013, 5.7350022168, 8194.2753332086],
    [0.00000000011, 3.260993348, 231348.55332920235],
    [0.00000000011, 0.98745400486, 98068.53671630539],
    [0.00000000012, 4.21243630037, 25938.3399444396],
    [0.00000000014, 1.00416829859, 97466.46267636596],
    [0.00000000011, 0.05165748634, 138633.7910410796],
    [0.00000000011, 3.31266829782, 23869.1460373874],
    [0.00000000013, 5.82415971172, 48835.19385644859],
    [0.00000000012, 5.21172202454, 77410.51304297059],
    [0.0000000001, 5.62483745036, 27676.976036858],
    [0.0000000001, 0.81135220941, 9384.8410080752],
    [0.00000000011, 5.23523774387, 127791.06088239799],
    [0.00000000012, 2.20158727938, 54087.0057663656],
    [0.0000000001, 5.86547432318, 190809.59732422797],
    [0.0000000001, 4.52183889946, 90989.16285949759],
    [0.0000000001, 0.19608921147, 178063.3684939606],
    [0.0000000001, 4.85395772807, 170068.84005193636],
    [0.00000000009, 3.83854717754, 24609.0365675098],
    [0.0000000001, 1.4217686047, 193937.9860893238],
    [0.00000000012, 2.82148354738, 56727.7597802072],
    [0.00000000011, 3.19570220444, 51219.51712717779],
    [0.00000000009, 4.04402175253, 183570.921732628],
    [0.00000000012, 1.96280489503, 154408.65498906677],
    [0.0000000001, 2.2320313923, 139428.98341330336],
    [0.00000000009, 2.6570038926, 237009.88537835455],
    [0.00000000011, 5.40186474769, 26301.2022370122],
    [0.00000000012, 4.76146772684, 50800.03248330259],
    [0.00000000009, 6.27339417466, 197092.67317421938],
    [0.00000000009, 3.98976715368, 181555.94006083018],
    [0.00000000012, 5.29460434563, 190495.41114435834],
    [0.00000000009, 3.65287534161, 130012.91751699499],
    [0.00000000009, 3.80590497546, 25668.418497699],
    [0.00000000009, 5.25410925797, 162188.75089859738],
    [0.00000000008, 2.0225744774, 1911.1994832172],
    [0.00000000009, 1.01246682947, 71378.55953479178],
    [0.00000000009, 4.24084441337, 87648.55043279778],
    [0.00000000009, 2.64828521245, 209812.60368468694],
    [0.00000000008, 6.05708123635, 29416.03879785439],
    [0.00000000008, 2.23040492516, 165516.88655487756],
    [0.00000000008, 1.00625843041, 175730.17210108857],
    [0.00000000008, 5.27598137918, 3462.2447058652],
    [0.00000000008, 5.07086359155, 76571.54375522019],
    [0.00000000008, 4.24188967282, 1731.1223529326],
    [0.00000000009, 2.94826640675, 24925.4284371664],
    [0.00000000009, 0.98909618433, 25654.19140369739],
    [0.00000000008, 4.85671503394, 24712.1293417284],
    [0.00000000009, 2.24115709023, 113341.08027172917],
    [0.00000000007, 4.49088795505, 247223.17092456558],
    [0.00000000008, 4.87126546204, 51543.0225438352],
    [0.00000000008, 5.08664125973, 152155.54248267098],
    [0.00000000007, 3.32212221831, 25131.61398560359],
    [0.00000000007, 0.58437135642, 29428.515568274],
    [0.00000000007, 3.87541654752, 225687.22128005017],
    [0.00000000006, 4.52058154063, 181026.24909573558],
    [0.00000000008, 1.18041147871, 49953.94964855139],
    [0.00000000006, 3.05047900411, 184834.07909520617],
    [0.00000000006, 2.25018098739, 87253.17713015496],
    [0.00000000006, 0.82991899659, 18207.81398823521],
    [0.00000000006, 1.32312732728, 50064.15596977079],
    [0.00000000005, 0.86249528651, 226796.59983214355],
    [0.00000000006, 4.86355988701, 73891.83305794839],
    [0.00000000006, 5.5116792943, 184526.5214742366],
    [0.00000000005, 1.01550371091, 45290.65639321759],
    [0.00000000006, 5.40131513096, 25455.119402261],
    [0.00000000005, 1.37265105593, 145872.4666326796],
    [0.00000000006, 3.47116917751, 155303.60100866656],
    [0.00000000005, 1.30400427615, 119784.56349110538],
    [0.00000000006, 2.54403414563, 50167.24874398939],
    [0.00000000005, 0.41019716811, 203375.74902421076],
    [0.00000000006, 6.18903427137, 78050.41032928458],
    [0.00000000006, 1.45184190645, 23866.04650697719],
    [0.00000000005, 5.71150367153, 9745.3205558566],
    [0.00000000005, 5.10312694138, 241561.83887541335],
    [0.00000000005, 4.61874347168, 58458.88213313979],
    [0.00000000005, 4.64351476715, 58220.0348645238],
    [0.00000000004, 3.89438582519, 252884.50297371778],
    [0.00000000005, 4.2271619284, 103285.11708910679],
    [0.00000000006, 3.4784644356, 129215.69786709236],
    [0.00000000005, 3.55759397902, 84307.93800609799],
    [0.00000000005, 2.9326256038, 75085.56363415498],
    [0.00000000005, 4.02165790585, 13675.5302520762],
    [0.00000000005, 4.91436049501, 2168.7604822826],
    [0.00000000005, 4.90280910426, 6129.2970395066],
    [0.00000000004, 2.70823972798, 51639.00177105299],
    [0.00000000005, 1.00430113874, 103299.34418310839],
    [0.00000000004, 0.96514584479, 101173.46677572919],
    [0.00000000005, 3.48759917576, 103127.79472551816],
    [0.00000000004, 1.59389167109, 23976.2528281966],
    [0.00000000006, 4.46852944502, 52099.5402118728],
    [0.00000000005, 0.0924548037, 11610.5519583742],
    [0.00000000004, 5.72208783244, 263097.78851992876],
    [0.00000000005, 2.59653261216, 156527.41884944518],
    [0.00000000004, 2.64629726007, 216897.50046580215],
    [0.00000000005, 0.27545469716, 206370.02873972157],
    [0.00000000004, 1.82310702607, 170049.1702910366],
    [0.00000000004, 3.47612366825, 181391.50415024077],
    [0.00000000004, 4.24459863774, 129799.61842155698],
    [0.00000000004, 1.58343289115, 117077.06600107178],
    [0.00000000004, 5.68197030016, 1639.069517188],
    [0.00000000004, 6.23236584355, 180282.12559814737],
    [0.00000000004, 5.28660254368, 76041.85279012559],
    [0.00000000004, 2.31324314682, 153878.9640239722],
    [0.00000000004, 0.42732089747, 1089.7087911936],
    [0.00000000005, 2.12551107324, 27999.1026247914],
    [0.00000000004, 1.84805445585, 103498.41618454478],
    [0.00000000004, 2.25550572281, 61165.27398858079],
    [0.00000000004, 2.24828459243, 210614.42461581077],
    [0.00000000005, 3.13895082301, 4083.9885067044],
    [0.00000000005, 3.21310350131, 120226.23016165999],
    [0.00000000005, 4.43458650755, 19958.6061020676],
    [0.00000000005, 0.37636294786, 120417.67842777158],
    [0.00000000004, 1.01002394193, 19202.75325164339],
    [0.00000000004, 1.36417531953, 196156.74319351057],
    [0.00000000004, 0.04830510117, 257436.45647077652],
    [0.00000000005, 5.95167108521, 1223.81784077861],
    [0.00000000003, 5.48828978473, 26514.5013324502],
    [0.00000000003, 2.27025696919, 191604.78969645177],
    [0.00000000004, 1.27089577741, 129909.82474277639],
    [0.00000000004, 2.72677172001, 24079.34560241519],
    [0.00000000004, 4.55679742694, 26011.6370702986],
    [0.00000000004, 0.89717430633, 78114.14622758799],
    [0.00000000004, 0.79567892143, 45405.0956819028],
    [0.00000000003, 4.63114500667, 12546.481939083],
    [0.00000000003, 5.59823547368, 32132.1317229496],
    [0.00000000003, 4.4685819893, 189853.99758261937],
    [0.00000000004, 1.68364015268, 102769.65321801379],
    [0.00000000003, 4.71177076295, 171178.21860402977],
    [0.00000000003, 5.01382784457, 76152.05911134499],
    [0.00000000003, 2.7315711877, 1884.9011634174],
    [0.00000000003, 3.40544970365, 164407.50800278416],
    [0.00000000004, 2.75012816246, 23888.81579828719],
    [0.00000000003, 4.58244026461, 39743.7636327506],
    [0.00000000003, 6.19232600104, 185943.45764729957],
    [0.00000000003, 0.91028294443, 50380.54783942739],
    [0.00000000003, 3.49443637392, 77039.89158394396],
    [0.00000000003, 2.3824031697, 50689.82616208319],
    [0.00000000003, 4.72494764858, 119002.41232088137],
    [0.00000000003, 1.24189207895, 93696.66034953119],
    [0.00000000004, 4.83226256364, 102755.42612401219],
    [0.00000000003, 3.06178977654, 223180.57631579356],
    [0.00000000004, 4.7163347523, 145090.31546245556],
    [0.00000000003, 1.7018517731, 51528.79544983359],
    [0.00000000004, 2.09323228877, 53235.18821333759],
    [0.00000000003, 5.06210643375, 180496.558130641],
    [0.00000000004, 3.17473739568, 50049.92887576919],
    [0.00000000003, 5.41695078998, 72602.37737557039],
    [0.00000000003, 3.88214483449, 124156.43985787958],
    [0.00000000003, 5.40709854969, 123758.29085447139],
    [0.00000000003, 1.20542657675, 76137.83201734339],
    [0.00000000003, 5.08765888715, 44937.1306915484],
    [0.00000000003, 4.71859324532, 48997.6604925808],
    [0.00000000002, 5.01891487935, 127261.36991730338],
    [0.00000000003, 2.13297513668, 25551.09862947879],
    [0.00000000003, 1.02350778639, 51432.81622261579],
    [0.00000000003, 3.95937256109, 77829.99768684579],
    [0.00000000002, 2.77808751912, 74923.09699802278],
    [0.00000000003, 1.27736716727, 273311.0740661397],
    [0.00000000002, 0.67164900163, 278972.40611529193],
    [0.00000000002, 0.48606814544, 76784.84285065818],
    [0.00000000003, 0.06222606473, 6044.2285813754],
    [0.00000000003, 5.55474148329, 77101.23472031478],
    [0.00000000002, 3.96766377596, 139589.3907826882],
    [0.00000000002, 2.66292278705, 212031.36078887375],
    [0.00000000003, 0.68612278061, 25619.9381512198],
    [0.00000000003, 1.76067598537, 51951.46148744649],
    [0.00000000003, 1.93139194132, 216583.31428593257],
    [0.00000000002, 2.25422647784, 35077.37084700659],
    [0.00000000002, 0.83267971298, 209658.82487420217],
    [0.00000000003, 4.79335904752, 47803.9299163742],
    [0.00000000002, 5.13631946278, 268759.12056908093],
    [0.00000000003, 3.48089140792, 307.5576209696],
    [0.00000000002, 1.0058477641, 24292.64469785319],
    [0.00000000002, 4.73268455784, 92914.50917930716],
    [0.00000000003, 3.6451918346, 23962.02573419499],
    [0.00000000003, 4.4884080764, 220025.88923089797],
    [0.00000000002, 1.01995280561, 6720.7139793414],
    [0.00000000002, 3.10978957733, 2014.9816717978],
    [0.00000000002, 5.99841085824, 51329.7234483972],
    [0.00000000002, 1.94256417661, 15406.65260500879],
    [0.00000000002, 5.25057444423, 29550.14784743939],
    [0.00000000002, 4.72640836568, 197266.12174560397],
    [0.00000000002, 3.26085869094, 204151.27163553477],
    [0.00000000002, 2.68504976831, 24601.92302050899],
    [0.00000000002, 2.24309347703, 8989.46770543239],
    [0.00000000002, 1.11858163408, 25344.9130810416],
    [0.00000000002, 2.14969204777, 6885.14988993081],
    [0.00000000002, 5.63923947364, 26720.68688088739],
    [0.00000000002, 0.60125377352, 641.41356173899],
    [0.00000000003, 6.19963753881, 4022.2625319642],
    [0.00000000002, 5.30488785319, 78793.40038981718],
    [0.00000000003, 0.56255292098, 77844.22478084739],
    [0.00000000002, 3.13593029127, 5193.3670587978],
    [0.00000000002, 1.47598591671, 77630.92568540938],
    [0.00000000002, 4.04601746968, 165677.29392426237],
    [0.00000000002, 0.42123751826, 156100.82065856917],
    [0.00000000002, 1.50897060264, 76887.93562487679],
    [0.00000000002, 5.71626633846, 235900.50682626115],
    [0.00000000002, 3.23280181388, 232457.93188129575],
    [0.00000000002, 3.58719020799, 333.8559407694],
    [0.00000000002, 5.96248095742, 134877.02991624456],
    [0.00000000002, 0.75642578989, 207643.8432024044],
    [0.00000000002, 1.87931357041, 102659.44689679438],
    [0.00000000002, 2.14996697886, 242671.21742750678],
    [0.00000000002, 1.51282963817, 171960.36977425378],
    [0.00000000002, 0.65277975408, 3492.5715668696],
    [0.00000000002, 6.22747028313, 77307.42026875199],
    [0.00000000002, 1.80199951187, 25863.55834587229],
    [0.00000000002, 2.09340753787, 34082.4315835984],
    [0.00000000002, 6.04419892177, 114.43928868521],
    [0.00000000002, 0.0293232491, 50903.1252575212],
    [0.00000000002, 5.30519569397, 236702.32775738495],
    [0.00000000002, 3.92868373537, 3.881335358],
    [0.00000000002, 2.78821769115, 80967.3255793982],
    [0.00000000002, 2.033455834, 188276.6540401716],
    [0.00000000002, 5.95430441561, 187052.83619939297],
    [0.00000000002, 1.76425803616, 25440.89230825939],
    [0.00000000002, 2.0516200244, 113736.45357437199],
    [0.00000000002, 5.95492280121, 160964.93305781877],
    [0.00000000002, 5.70445846658, 35833.2236974308],
    [0.00000000002, 0.22377695049, 19336.86230122839],
    [0.00000000002, 1.5607181286, 222244.64633508475],
    [0.00000000002, 2.17481271902, 102239.96225291918],
    [0.00000000002, 5.48575213123, 917.9302859818],
    [0.00000000002, 0.28582783113, 76777.72930365738],
    [0.00000000002, 1.68113515416, 66941.04532641819],
    [0.00000000002, 0.66109821463, 251775.12442162435],
    [0.00000000002, 3.49623644455, 50951.98844236979],
    [0.00000000002, 0.31263748192, 200708.69669056937],
    [0.00000000002, 2.15441806772, 110395.84114767218],
    [0.00000000002, 1.94352751762, 204331.34876581936],
    [0.00000000002, 5.62614216578, 22909.7573510066],
    [0.00000000002, 1.29549075766, 207114.15223730978],
    [0.00000000002, 2.87127317505, 579.6875869988],
    [0.00000000002, 2.50729220975, 289185.69166150293],
    [0.00000000002, 3.81127762574, 54879.422437824],
    [0.00000000002, 1.51695666038, 8014.198202924],
    [0.00000000002, 0.98010038743, 25138.7275326044],
    [0.00000000001, 5.97058708066, 108789.12677467037],
    [0.00000000001, 1.73018482963, 1263.15736257819],
    [0.00000000001, 4.50374882526, 51653.22886505459],
    [0.00000000001, 2.51341863129, 30639.856638633],
    [0.00000000002, 3.90363937031, 113501.48764111398],
    [0.00000000001, 4.92022626292, 230419.25190739357],
];

const A1: &[Term] = &[
    [0.00000003609, 1.48075596278, 1109.3785520934],
    [0.00000002094, 4.055914517, 5661.3320491522],
    [0.00000001295, 4.14267090122, 4551.9534970588],
    [0.00000000885, 0.21909962459, 11322.6640983044],
    [0.00000000758, 5.22541922718, 21535.9496445154],
    [0.00000000404, 1.44602107506, 27197.2816936676],
    [0.00000000371, 0.1751561145, 37410.5672398786],
    [0.00000000395, 2.99006001662, 25028.521211385],
    [0.00000000312, 2.70848268271, 16983.9961474566],
    [0.0000000035, 0.62960919108, 13521.7514415914],
    [0.00000000341, 4.63236309923, 26087.9031415742],
    [0.000000003, 3.96314528147, 6770.7106012456],
    [0.00000000225, 2.67684365134, 43071.8992890308],
    [0.00000000189, 1.65310504362, 50586.73338786459],
    [0.00000000183, 2.03380217827, 24498.8302462904],
    [0.0000000019, 5.56471827197, 955.5997416086],
    [0.00000000168, 3.93822559378, 32858.61374281979],
    [0.00000000183, 1.4153579768, 53285.1848352418],
    [0.00000000197, 4.21440130326, 3442.5749449654],
    [0.00000000145, 0.41014492216, 9103.9069941176],
    [0.00000000137, 2.81445733124, 7238.6755916],
    [0.00000000147, 4.00591825793, 57837.1383323006],
    [0.00000000128, 2.88750743224, 14765.2390432698],
    [0.00000000126, 3.91124565624, 58946.51688439399],
    [0.00000000139, 1.40633716613, 2218.7571041868],
    [0.00000000107, 2.89221236592, 33326.5787331742],
    [0.00000000102, 5.16982514098, 48733.23133818299],
    [0.00000000107, 5.19422288874, 22645.32819660879],
    [0.00000000118, 2.80500035521, 77204.32749453338],
    [0.00000000101, 5.23370919509, 73711.75592766379],
    [0.00000000086, 2.66535205693, 69159.80243060499],
    [0.00000000068, 5.14968686816, 74821.13447975718],
    [0.00000000062, 0.12025637641, 64607.84893354619],
    [0.00000000064, 0.1428701666, 38519.945791972],
    [0.00000000073, 0.16140517422, 12432.0426503978],
    [0.00000000059, 1.64169611176, 52175.8062831484],
    [0.00000000059, 0.75260286901, 83925.0414738748],
    [0.00000000062, 0.59638272818, 65697.55772473979],
    [0.00000000059, 0.17411164175, 89586.37352302698],
    [0.00000000049, 1.98757482893, 99799.65906923798],
    [0.00000000046, 5.54058141694, 27043.5028831828],
    [0.00000000048, 5.8583055781, 103292.23063610759],
    [0.00000000042, 5.55923938952, 53131.406024757],
    [0.0000000004, 0.9435520805, 50057.04242277],
    [0.00000000041, 1.37560123545, 54394.56338733519],
    [0.00000000036, 1.35616435838, 80482.46652890938],
    [0.00000000036, 0.10994989958, 90695.75207512038],
    [0.00000000035, 3.2192052263, 115674.27666460119],
    [0.00000000039, 3.93007368265, 85034.42002596818],
    [0.00000000034, 1.41698555569, 23969.1392811958],
    [0.00000000038, 5.77786910204, 41962.5207369374],
    [0.00000000035, 6.26879139407, 51109.31080595839],
    [0.00000000034, 5.79863533122, 51123.53789995999],
    [0.00000000037, 1.39498118322, 28306.66024576099],
    [0.0000000003, 3.42364035802, 36301.18868778519],
    [0.00000000032, 1.39251973806, 105460.99111839019],
    [0.00000000028, 3.21580954395, 85502.38501632259],
    [0.00000000026, 2.6094866625, 70269.18098269838],
    [0.00000000024, 4.27029408518, 76674.63652943878],
    [0.00000000022, 4.52950563915, 78263.70942472259],
    [0.00000000022, 4.44908567205, 131548.89425996438],
    [0.00000000022, 3.6873580112, 51535.90899683439],
    [0.00000000023, 3.85172397466, 51646.11531805379],
    [0.00000000022, 1.90194003363, 46848.3301747656],
    [0.00000000022, 3.57391462703, 91785.46086631398],
    [0.00000000022, 5.86668611652, 25035.6347583858],
    [0.00000000021, 2.59478483267, 96357.08412427259],
    [0.00000000025, 0.08243054466, 25021.4076643842],
    [0.0000000002, 1.64979939248, 24978.5245894808],
    [0.00000000018, 5.09929616832, 76144.94556434419],
    [0.00000000022, 2.62152962015, 44181.27784112419],
    [0.00000000017, 4.30606826388, 2333.196392872],
    [0.00000000018, 1.59186103673, 15874.6175953632],
    [0.00000000016, 3.82271444156, 110012.94461544899],
    [0.00000000017, 1.35531508415, 106570.36967048359],
    [0.00000000016, 5.58608013491, 26617.5941066688],
    [0.0000000002, 2.63596585673, 18093.37469954999],
    [0.00000000017, 3.66214301716, 25448.00585526019],
    [0.00000000016, 5.05587097981, 125887.56221081219],
    [0.00000000017, 2.36650337855, 25661.3049506982],
    [0.00000000019, 5.45787256466, 19317.1925403286],
    [0.00000000015, 1.9363272814, 72936.23331633979],
    [0.00000000015, 3.83800149244, 86143.79857806159],
    [0.00000000015, 3.8794810059, 7880.08915333899],
    [0.00000000014, 2.62744670726, 129380.13377768178],
    [0.00000000014, 1.67050815949, 47623.8527860896],
    [0.00000000013, 0.00338273658, 141762.17980617538],
    [0.00000000015, 2.60111702773, 121335.60871375339],
    [0.00000000013, 2.70838418278, 63498.47038145279],
    [0.00000000014, 1.89001918108, 20760.4270331914],
    [0.00000000015, 0.33886780728, 102762.53967101299],
    [0.00000000015, 5.22139039759, 100909.03762133139],
    [0.00000000012, 5.67886987368, 147423.51185532758],
    [0.00000000015, 3.85535504207, 60055.89543648739],
    [0.00000000014, 2.98045053162, 13655.8604911764],
    [0.00000000012, 6.23759917239, 111590.2881578968],
    [0.00000000014, 5.19007870582, 25558.2121764796],
    [0.00000000011, 3.8292473375, 16066.0658614748],
    [0.00000000011, 3.83083504363, 112231.70171963578],
    [0.00000000011, 0.50197962565, 7994.5284420242],
    [0.00000000012, 4.2464488022, 51116.4243529592],
    [0.0000000001, 0.18606768404, 45892.73043315699],
    [0.0000000001, 3.84856758037, 79373.087976816],
    [0.00000000009, 3.62684835642, 42153.969003049],
    [0.00000000009, 1.23324732274, 157636.79740153858],
    [0.00000000012, 3.87111768018, 33967.99229491319],
    [0.0000000001, 4.40556148201, 59414.4818747484],
    [0.00000000011, 5.82826139237, 105307.21230790539],
    [0.00000000009, 4.51875856438, 66653.15746634839],
    [0.00000000009, 5.07520013387, 102018.41617342478],
    [0.00000000008, 2.18310947391, 46514.4742339962],
    [0.0000000001, 5.08985949119, 75930.51303185058],
    [0.00000000008, 2.61693338222, 122444.98726584678],
    [0.00000000009, 5.57954527579, 50579.61984086379],
    [0.00000000007, 1.24299221195, 104351.61256629678],
    [0.00000000007, 0.62146193335, 163298.1294506908],
    [0.00000000006, 2.46252712457, 173511.41499690176],
    [0.00000000006, 0.35614355407, 117873.36400788819],
    [0.00000000006, 5.02312072741, 95247.70557217918],
    [0.00000000007, 3.00630576462, 77197.21394753258],
    [0.00000000007, 1.70180850738, 39609.6545831656],
    [0.00000000008, 5.10586818153, 49842.60989027639],
    [0.00000000007, 0.32343885403, 77734.01845962799],
    [0.00000000006, 2.60510407266, 131395.11544947958],
    [0.00000000007, 3.79874275767, 137210.22630911658],
    [0.00000000006, 5.11710169418, 23754.70674870219],
    [0.00000000008, 2.5487244819, 77211.44104153418],
    [0.00000000006, 5.07781231977, 128106.31931499895],
    [0.00000000007, 4.4854275668, 40565.2543247742],
    [0.00000000006, 3.22920498053, 128850.44281258718],
    [0.00000000006, 0.80248911687, 79219.3091663312],
    [0.00000000006, 4.6623820504, 92741.06060792258],
    [0.00000000006, 0.04209776232, 91805.13062721379],
    [0.00000000006, 0.03134480648, 117893.03376878797],
    [0.00000000005, 6.00852781984, 50593.84693486539],
    [0.00000000007, 4.51388706427, 19406.6782881746],
    [0.00000000006, 5.83283891244, 24491.71669928959],
    [0.00000000005, 2.08608145397, 31749.2351907264],
    [0.00000000005, 4.40399418391, 71980.63357473118],
    [0.00000000005, 1.84330764329, 151975.46535238638],
    [0.00000000005, 1.31501890049, 3328.13565628019],
    [0.00000000005, 2.349923179, 77837.11123384659],
    [0.00000000005, 0.19706316316, 49527.35145767539],
    [0.00000000006, 2.78565833302, 38813.3565763492],
    [0.00000000005, 0.61331166639, 136100.84775702318],
    [0.00000000006, 3.17307680268, 12725.453434775],
    [0.00000000005, 6.2199775741, 24505.94379329119],
    [0.00000000004, 3.01641399551, 137678.191299471],
    [0.00000000005, 0.05747326167, 65717.22748563958],
    [0.00000000004, 3.07271586044, 167850.0829477496],
    [0.00000000004, 3.1400776368, 76681.75007643958],
    [0.00000000005, 1.29899172433, 5327.4761083828],
    [0.00000000005, 0.29023551936, 116783.65521669458],
    [0.00000000004, 5.67860835066, 155468.036919256],
    [0.00000000004, 3.69133778836, 189386.03259226496],
    [0.00000000004, 4.48228111835, 51322.60990139639],
    [0.00000000004, 4.56916124718, 75615.25459924959],
    [0.00000000004, 0.90688525405, 86457.98475793119],
    [0.00000000004, 6.2122849115, 111122.32316754239],
    [0.00000000004, 0.8735492159, 23439.44831610119],
    [0.00000000004, 0.07032614972, 39629.32434406539],
    [0.00000000004, 0.0762512048, 13541.42120249119],
    [0.00000000004, 2.59113319932, 51742.09454527159],
    [0.00000000004, 2.10705916639, 51756.3216392732],
    [0.00000000004, 1.84506814443, 179172.74704605396],
    [0.00000000004, 4.30204695838, 183724.7005431128],
    [0.00000000004, 1.27867154657, 107679.74822257696],
    [0.00000000003, 3.8954216552, 138319.60486120995],
    [0.00000000004, 2.13431722085, 125112.03959948818],
    [0.00000000003, 1.64568521911, 102232.84870591838],
    [0.00000000003, 4.46233029784, 25234.70675982219],
    [0.00000000004, 3.36642207861, 76667.52298243798],
    [0.00000000003, 1.27326020816, 133767.65136415116],
    [0.00000000004, 1.29258747947, 81591.84508100279],
    [0.00000000004, 4.46580859455, 14477.3511832],
    [0.00000000003, 0.85158739931, 60370.08161635699],
    [0.00000000004, 0.41759919696, 35191.8101356918],
    [0.00000000003, 0.04776043377, 143980.93691036216],
    [0.00000000003, 4.22402155895, 29530.4780865396],
    [0.00000000003, 4.17159062974, 19.66976089979],
    [0.00000000003, 0.57011054241, 77623.81213840858],
    [0.00000000003, 3.47586676646, 99024.13645791399],
    [0.00000000003, 5.24743565969, 151199.94274106238],
    [0.00000000003, 2.19530747631, 25668.418497699],
    [0.00000000003, 5.53127864434, 199599.31813847594],
    [0.00000000003, 1.30614394266, 55503.94193942859],
    [0.00000000003, 1.05010853468, 51962.5071877104],
    [0.00000000003, 2.95256850102, 27147.28507176339],
    [0.00000000002, 5.67075763278, 157483.01859105378],
    [0.00000000003, 1.93591157671, 35472.7441496494],
    [0.00000000002, 2.48695822148, 9384.8410080752],
    [0.00000000002, 4.91971386182, 205260.65018762814],
    [0.00000000002, 0.87521596578, 467.9649903544],
    [0.00000000003, 4.97782376962, 153084.84390447979],
    [0.00000000002, 1.55320674243, 64901.25971792339],
    [0.00000000003, 5.95784484315, 19804.8272915828],
    [0.00000000002, 1.74593544581, 23869.1460373874],
    [0.00000000002, 4.29360625219, 130439.51570787099],
    [0.00000000003, 2.51666285265, 123554.36581794015],
    [0.00000000002, 6.26135185774, 154938.34595416137],
    [0.00000000002, 5.38191059395, 103925.01437542078],
    [0.00000000003, 2.67937241533, 25654.19140369739],
    [0.00000000003, 2.52825447689, 97466.46267636596],
    [0.00000000002, 1.12469268267, 126996.94076290558],
    [0.00000000002, 1.31487735043, 29416.03879785439],
    [0.00000000002, 1.13548352414, 112545.88789950538],
    [0.00000000002, 3.42420320671, 143961.2671494624],
    [0.00000000002, 2.54177630479, 71378.55953479178],
    [0.00000000002, 3.28820800929, 103821.92160120218],
    [0.00000000002, 0.47723293686, 215473.93573383917],
    [0.00000000002, 3.06584849318, 195047.36464141717],
    [0.00000000002, 3.58961649312, 106262.81204951399],
    [0.00000000002, 2.51847478476, 149642.26895951436],
    [0.00000000002, 0.88172840248, 61560.64729122359],
    [0.00000000002, 3.60845331495, 62389.09182935939],
    [0.00000000002, 1.09495636872, 77410.51304297059],
    [0.00000000002, 1.79724166733, 132658.27281205778],
    [0.00000000001, 5.55034624452, 18207.81398823521],
    [0.00000000002, 3.5091442129, 80174.90890793978],
    [0.00000000001, 5.99647786368, 103285.11708910679],
    [0.00000000002, 0.82043095733, 34282.1784747828],
    [0.00000000002, 1.04424755238, 56727.7597802072],
    [0.00000000001, 1.30987336666, 159855.55450572536],
    [0.00000000001, 6.14761463041, 221135.26778299137],
    [0.00000000001, 6.08343849338, 163766.0944410452],
];

const A2: &[Term] = &[
    [0.00000000153, 3.06141740719, 1109.3785520934],
    [0.00000000036, 2.53025682332, 4551.9534970588],
    [0.00000000026, 1.82404928219, 11322.6640983044],
    [0.00000000027, 5.70587421337, 5661.3320491522],
    [0.00000000017, 5.53291571023, 6770.7106012456],
    [0.00000000013, 4.28753229581, 16983.9961474566],
    [0.00000000012, 3.05739110265, 27197.2816936676],
    [0.00000000014, 2.64548318068, 3442.5749449654],
    [0.00000000012, 0.65606926442, 21535.9496445154],
    [0.00000000012, 2.97073622761, 2218.7571041868],
    [0.00000000008, 3.28413446785, 24498.8302462904],
    [0.00000000008, 5.11702850054, 9103.9069941176],
    [0.00000000008, 0.21303771812, 955.5997416086],
    [0.00000000007, 3.01228365212, 50586.73338786459],
    [0.00000000007, 5.51820025604, 32858.61374281979],
    [0.00000000007, 4.2970580337, 43071.8992890308],
    [0.00000000006, 0.47806977979, 22645.32819660879],
    [0.00000000005, 1.29949945936, 14765.2390432698],
    [0.00000000006, 1.92507262591, 37410.5672398786],
    [0.00000000005, 4.35192453408, 25028.521211385],
    [0.00000000005, 3.68880230383, 7238.6755916],
    [0.00000000004, 0.46946904753, 48733.23133818299],
    [0.00000000005, 1.72505274228, 12432.0426503978],
    [0.00000000004, 2.06897916107, 13521.7514415914],
    [0.00000000004, 5.54297165351, 58946.51688439399],
    [0.00000000004, 1.70899825596, 38519.945791972],
    [0.00000000004, 3.22726470166, 26087.9031415742],
    [0.00000000003, 1.70759956284, 64607.84893354619],
    [0.00000000002, 2.18904281919, 50057.04242277],
    [0.00000000003, 3.20885826751, 53285.1848352418],
    [0.00000000002, 2.61801224152, 23969.1392811958],
    [0.00000000002, 2.942272425, 54394.56338733519],
    [0.00000000002, 2.50169329357, 57837.1383323006],
    [0.00000000003, 2.95536307327, 28306.66024576099],
    [0.00000000002, 2.73584537953, 2333.196392872],
    [0.00000000002, 0.51304236216, 74821.13447975718],
    [0.00000000002, 2.94962303271, 80482.46652890938],
    [0.00000000002, 5.44709621466, 7880.08915333899],
    [0.00000000002, 3.74604957368, 73711.75592766379],
    [0.00000000002, 4.20220409276, 18093.37469954999],
    [0.00000000002, 4.17794310826, 70269.18098269838],
    [0.00000000002, 3.48822883012, 33326.5787331742],
];

const L0: &[Term] = &[
    [4.4026088424, 0.0, 0.0],
    [0.00003557754, 1.51229384945, 1109.3785520934],
    [0.00001732389, 4.10404056787, 5661.3320491522],
    [0.00000343693, 5.7660206629, 955.5997416086],
    [0.0000027457, 0.97829198562, 4551.9534970588],
    [0.00000272395, 2.48847158325, 529.6909650946],
    [0.00000222838, 0.11565050964, 1059.3819301892],
    [0.0000019367, 0.27156027221, 11322.6640983044],
    [0.00000211195, 5.29995252496, 21535.9496445154],
    [0.00000238783, 4.02571732502, 31749.2351907264],
    [0.00000201761, 2.79503077058, 15874.6175953632],
    [0.00000160008, 0.66202900792, 13521.7514415914],
    [0.00000121943, 2.99718600299, 25028.521211385],
    [0.00000094825, 1.50862123851, 26087.9031415742],
    [0.000000936, 0.3025676942, 10213.285546211],
    [0.00000096273, 2.89952687767, 51116.4243529592],
    [0.0000007495, 0.24614011942, 37410.5672398786],
    [0.00000069248, 4.1944647762, 19.66976089979],
    [0.00000061199, 3.15946490958, 7238.6755916],
    [0.00000076031, 5.26005179562, 47623.8527860896],
    [0.0000007031, 0.58406308556, 39609.6545831656],
    [0.00000050779, 1.50476344789, 27197.2816936676],
    [0.00000047559, 5.49721708436, 3.881335358],
    [0.0000004717, 3.99383913846, 6770.7106012456],
    [0.00000035243, 2.75370550367, 16983.9961474566],
    [0.00000034354, 5.20606065163, 6283.0758499914],
    [0.00000040773, 4.21063794846, 19804.8272915828],
    [0.00000035863, 1.42469894852, 2218.7571041868],
    [0.00000031309, 1.47752899469, 53285.1848352418],
    [0.00000027743, 0.64898771837, 426.598190876],
    [0.00000028287, 3.2374568229, 33326.5787331742],
    [0.00000029581, 0.69909724583, 213.299095438],
    [0.00000023163, 5.31644396973, 20426.571092422],
    [0.00000023657, 0.6522745878, 1589.0728952838],
    [0.00000024248, 4.39976881249, 7.1135470008],
    [0.00000027042, 1.05803152421, 3442.5749449654],
    [0.00000022117, 2.7368991858, 43071.8992890308],
    [0.00000025451, 0.2146798522, 63498.47038145279],
    [0.00000019624, 2.43209671616, 24498.8302462904],
    [0.00000016512, 0.77935062482, 57837.1383323006],
    [0.00000017179, 3.26085087527, 153.7788104848],
    [0.00000013067, 3.98941803595, 32858.61374281979],
    [0.00000014835, 2.11893838086, 50586.73338786459],
    [0.00000016838, 3.2446175545, 59414.4818747484],
    [0.00000012035, 2.50312304729, 12566.1516999828],
    [0.00000013537, 2.71144790736, 69159.80243060499],
    [0.00000011899, 5.74904202567, 25558.2121764796],
    [0.00000010724, 3.96954938931, 58946.51688439399],
    [0.00000012079, 5.93109133347, 77204.32749453338],
    [0.00000011444, 2.01460481576, 73711.75592766379],
    [0.00000009263, 4.0300290992, 467.9649903544],
    [0.00000010089, 2.76328575094, 41962.5207369374],
    [0.00000008368, 5.85066793733, 27043.5028831828],
    [0.00000008562, 5.88649899536, 53131.406024757],
    [0.00000007753, 5.23519035431, 22645.32819660879],
    [0.00000007421, 4.71153577789, 6.62855890001],
    [0.00000006504, 5.22361908485, 48733.23133818299],
    [0.00000008153, 1.46250516725, 79373.087976816],
    [0.00000006619, 3.24641186897, 89586.37352302698],
    [0.00000006612, 3.63260502221, 65697.55772473979],
    [0.00000005152, 0.41742381121, 36301.18868778519],
    [0.00000005316, 5.2034102441, 74821.13447975718],
    [0.0000000562, 0.08433490344, 76674.63652943878],
    [0.00000006068, 0.19140778308, 12432.0426503978],
    [0.00000005792, 3.94881389011, 85034.42002596818],
    [0.00000004784, 2.84581240571, 14765.2390432698],
    [0.00000005651, 2.4363319306, 25661.3049506982],
    [0.00000003857, 3.55287503967, 9103.9069941176],
    [0.00000003605, 4.14059791764, 30639.856638633],
    [0.00000003484, 0.17443447191, 64607.84893354619],
    [0.00000003522, 0.18936482371, 38519.945791972],
    [0.00000004552, 2.34860572481, 51749.20809227239],
    [0.00000004257, 5.9101353981, 79219.3091663312],
    [0.00000003272, 6.1389467119, 639.897286314],
    [0.00000003455, 4.47902663764, 105460.99111839019],
    [0.00000002792, 2.22198317046, 46848.3301747656],
    [0.00000003064, 0.00654070476, 85502.38501632259],
    [0.00000002613, 0.1558664576, 90695.75207512038],
    [0.00000002807, 2.25726525361, 72936.23331633979],
    [0.0000000246, 1.14776674114, 2333.196392872],
    [0.00000002538, 6.23411997685, 51646.11531805379],
    [0.00000002323, 2.16466795327, 20760.4270331914],
    [0.00000002417, 3.95933175194, 49.9966219042],
    [0.00000002386, 0.17890038612, 103.0927742186],
    [0.00000002732, 1.08027597282, 632.7837393132],
    [0.00000002086, 3.96507816927, 83925.0414738748],
    [0.00000002559, 4.43996217143, 19406.6782881746],
    [0.00000002326, 4.17292366533, 45892.73043315699],
    [0.00000002389, 5.19140337521, 100909.03762133139],
    [0.00000002084, 2.53963178181, 3340.6124266998],
    [0.00000001968, 3.4912400112, 52175.8062831484],
    [0.00000001891, 1.4089346623, 80482.46652890938],
    [0.00000001929, 1.42511637363, 54394.56338733519],
    [0.00000001912, 5.14602266507, 99799.65906923798],
    [0.00000001895, 1.1938705708, 2118.7638603784],
    [0.00000002237, 2.73773968776, 95247.70557217918],
    [0.00000002151, 1.86680634812, 23969.1392811958],
    [0.00000001699, 2.69052343719, 103292.23063610759],
    [0.00000001582, 1.33349755875, 114.43928868521],
    [0.00000001894, 1.4331591188, 28306.66024576099],
    [0.00000001824, 0.38961424895, 522.5774180938],
    [0.00000001604, 1.31577461007, 50057.04242277],
    [0.00000001661, 5.71374739409, 121335.60871375339],
    [0.00000001461, 3.62023756262, 149.5631971346],
    [0.00000001413, 5.4810792179, 32370.9789915656],
    [0.00000001439, 0.07069767673, 115674.27666460119],
    [0.00000001919, 3.9034709564, 74.7815985673],
    [0.0000000136, 0.34749201784, 1052.2683831884],
    [0.00000001532, 2.10755331195, 26617.5941066688],
    [0.00000001397, 1.64736406847, 24978.5245894808],
    [0.0000000126, 3.73248361152, 16066.0658614748],
    [0.00000001705, 4.40082692708, 316.3918696566],
    [0.0000000132, 3.9059304872, 7880.08915333899],
    [0.00000001381, 5.14693991228, 419.4846438752],
    [0.00000001254, 1.39398938165, 106570.36967048359],
    [0.0000000126, 3.16023795418, 1066.49547719],
    [0.00000001574, 4.27946624468, 45494.58142974879],
    [0.00000001159, 0.04371836816, 18849.2275499742],
    [0.0000000111, 2.66032364476, 70269.18098269838],
    [0.00000001249, 2.66292687518, 105307.21230790539],
    [0.00000001055, 4.8764002543, 66653.15746634839],
    [0.00000001163, 5.78944782317, 76144.94556434419],
    [0.00000001017, 2.64439834611, 96357.08412427259],
    [0.0000000106, 3.61243686127, 206.1855484372],
    [0.00000000957, 1.28911104701, 131548.89425996438],
    [0.00000001169, 2.67195036688, 18093.37469954999],
    [0.00000000913, 3.27313678897, 76.2660712756],
    [0.00000000917, 5.56610569622, 46514.4742339962],
    [0.00000000896, 0.48863675555, 91785.46086631398],
    [0.00000001158, 3.22674170285, 102762.53967101299],
    [0.00000000931, 4.91584633313, 92741.06060792258],
    [0.00000000982, 2.67170193286, 44181.27784112419],
    [0.00000001022, 3.22862470438, 25448.00585526019],
    [0.00000001055, 2.30618444634, 99024.13645791399],
    [0.00000000786, 3.38214250641, 42153.969003049],
    [0.00000000924, 0.15993014586, 116783.65521669458],
    [0.00000000765, 4.82687733534, 40565.2543247742],
    [0.0000000085, 5.05072383224, 307.5576209696],
    [0.00000000845, 5.43653453433, 536.8045120954],
    [0.00000000735, 0.66903558311, 137210.22630911658],
    [0.00000000674, 2.85352743321, 25035.6347583858],
    [0.00000000643, 3.89559043115, 86143.79857806159],
    [0.00000000715, 1.88292441482, 2199.087343287],
    [0.00000000615, 1.33406123207, 3328.13565628019],
    [0.00000000735, 3.17247068351, 51535.90899683439],
    [0.0000000069, 4.75028788051, 14477.3511832],
    [0.00000000594, 5.15819353094, 333.8559407694],
    [0.00000000581, 2.5129990558, 147423.51185532758],
    [0.00000000581, 2.63566656341, 122444.98726584678],
    [0.00000000645, 0.01324748075, 22747.2907148744],
    [0.00000000614, 2.96021067689, 40853.142184844],
    [0.00000000561, 4.83053380365, 68050.42387851159],
    [0.00000000536, 3.88127768399, 112231.70171963578],
    [0.00000000558, 3.11356792768, 111590.2881578968],
    [0.00000000694, 6.23748472523, 25021.4076643842],
    [0.00000000534, 3.60710941571, 1911.1994832172],
    [0.00000000574, 5.40299680909, 77837.11123384659],
    [0.00000000577, 3.90865388307, 60055.89543648739],
    [0.00000000548, 5.81275299974, 1731.1223529326],
    [0.00000000466, 4.49962085446, 110.2063212194],
    [0.00000000548, 6.14672468282, 51109.31080595839],
    [0.00000000536, 2.76955077623, 51123.53789995999],
    [0.00000000549, 4.609529014, 6681.2248533996],
    [0.00000000472, 5.32267838064, 125112.03959948818],
    [0.00000000408, 1.24930742961, 86457.98475793119],
    [0.00000000493, 3.91411102299, 33967.99229491319],
    [0.00000000381, 3.52612904292, 102232.84870591838],
    [0.00000000406, 0.52957829976, 27147.28507176339],
    [0.00000000463, 3.01375142186, 12725.453434775],
    [0.00000000369, 5.13133947787, 102018.41617342478],
    [0.00000000394, 0.52828988073, 433.7117378768],
    [0.00000000387, 0.68634366572, 134.109049585],
    [0.00000000337, 1.939371446, 125887.56221081219],
    [0.00000000355, 1.99875778773, 1089.7087911936],
    [0.00000000457, 4.3433485173, 5327.4761083828],
    [0.00000000415, 5.4433479275, 19317.1925403286],
    [0.00000000365, 4.18101180491, 111122.32316754239],
    [0.000000004, 2.17340455205, 641.41356173899],
    [0.00000000328, 3.74061908139, 163298.1294506908],
    [0.00000000315, 1.2017880681, 60370.08161635699],
    [0.00000000416, 0.46551754107, 1.4844727083],
    [0.00000000303, 3.15337218629, 141762.17980617538],
    [0.00000000301, 0.7300250683, 110012.94461544899],
    [0.00000000351, 5.14486894072, 75930.51303185058],
    [0.00000000311, 3.63132909265, 7994.5284420242],
    [0.00000000307, 2.83175101621, 38654.05484155699],
    [0.00000000333, 4.88500212848, 25874.6040461362],
    [0.00000000293, 5.75362387222, 131395.11544947958],
    [0.00000000275, 5.12010969595, 128106.31931499895],
    [0.00000000287, 4.43997728526, 579.6875869988],
    [0.00000000304, 1.29676076615, 112545.88789950538],
    [0.00000000303, 5.33637015598, 853.196381752],
    [0.00000000264, 5.73655383064, 129380.13377768178],
    [0.00000000268, 0.5652611407, 3462.2447058652],
    [0.0000000028, 0.97300420266, 1639.069517188],
    [0.00000000322, 1.43121857358, 132658.27281205778],
    [0.00000000355, 1.23937863697, 1223.81784077861],
    [0.00000000293, 1.91472832986, 153084.84390447979],
    [0.00000000278, 2.48473861735, 38813.3565763492],
    [0.00000000266, 5.15239744608, 23754.70674870219],
    [0.00000000259, 5.82416399524, 1692.1656695024],
    [0.00000000258, 3.88278283857, 138319.60486120995],
    [0.00000000237, 4.37199833595, 157636.79740153858],
    [0.00000000278, 2.98287499753, 77734.01845962799],
    [0.00000000275, 1.04314611447, 8194.2753332086],
    [0.00000000261, 0.19486607112, 2168.7604822826],
    [0.00000000262, 0.54132415805, 949.1756089698],
    [0.00000000286, 0.44741191508, 35191.8101356918],
    [0.00000000281, 5.1535560748, 49842.60989027639],
    [0.00000000249, 5.46310796095, 621.7438008392],
    [0.00000000221, 1.04246001745, 78263.70942472259],
    [0.00000000208, 0.08474196864, 117893.03376878797],
    [0.00000000207, 1.95538092235, 735.8765135318],
    [0.00000000237, 3.57163787821, 24395.7374720718],
    [0.00000000227, 2.22609301178, 68241.8721446232],
    [0.0000000019, 5.92228251292, 71980.63357473118],
    [0.00000000191, 0.10349911268, 13541.42120249119],
    [0.000000002, 6.03382734742, 1581.959348283],
    [0.00000000239, 5.01519123466, 118828.96374949679],
    [0.00000000218, 0.02446877924, 128850.44281258718],
    [0.0000000019, 4.24316003876, 14.2270940016],
    [0.0000000021, 0.77504085166, 917.9302859818],
    [0.00000000227, 0.76503842975, 220.4126424388],
    [0.00000000214, 0.0976950815, 91805.13062721379],
    [0.00000000187, 3.32299343484, 30.3268610044],
    [0.00000000224, 6.01509639799, 77623.81213840858],
    [0.00000000201, 3.67306061165, 1596.1864422846],
    [0.00000000194, 1.96528922573, 314.1861798696],
    [0.00000000183, 4.30245602653, 1884.9011634174],
    [0.00000000168, 5.59401071136, 173511.41499690176],
    [0.00000000171, 2.30516098722, 101.9625182656],
    [0.00000000172, 4.97152997596, 179172.74704605396],
    [0.00000000168, 1.50492192945, 64901.25971792339],
    [0.00000000194, 1.13895085435, 34282.1784747828],
    [0.00000000163, 2.27241672177, 9384.8410080752],
    [0.0000000016, 3.35862316466, 24505.94379329119],
    [0.00000000163, 6.01376765542, 224.3447957019],
    [0.00000000156, 3.90782318472, 106262.81204951399],
    [0.00000000197, 1.30544412919, 23439.44831610119],
    [0.00000000191, 3.05157528074, 142871.55835826878],
    [0.0000000016, 5.08688171574, 75615.25459924959],
    [0.0000000015, 0.50365789714, 49527.35145767539],
    [0.00000000176, 1.18131059283, 62389.09182935939],
    [0.00000000186, 0.91116385724, 71582.48457132299],
    [0.00000000167, 1.70403546781, 144916.86689107097],
    [0.00000000155, 1.79785968269, 3.9321532631],
    [0.00000000145, 4.50321561099, 956.2891559706],
    [0.00000000138, 3.58520230434, 117873.36400788819],
    [0.00000000149, 1.57660472167, 126996.94076290558],
    [0.00000000137, 0.07845573865, 143980.93691036216],
    [0.00000000139, 2.11833705848, 151199.94274106238],
    [0.00000000185, 3.45444692609, 50483.640613646],
    [0.00000000135, 3.85920780634, 80174.90890793978],
    [0.00000000174, 0.10827327089, 65717.22748563958],
    [0.00000000132, 5.46557721041, 10021.8372800994],
    [0.00000000134, 0.11175618327, 39629.32434406539],
    [0.0000000016, 4.72127811851, 4083.9885067044],
    [0.00000000147, 0.3879048548, 487.6347512542],
    [0.00000000167, 5.69992108727, 24491.71669928959],
    [0.00000000135, 1.73220800297, 2648.454825473],
    [0.00000000138, 1.04705090542, 1083.0802322936],
    [0.00000000119, 3.30330743236, 1263.15736257819],
    [0.00000000127, 0.20601017903, 38.1330356378],
    [0.00000000156, 4.46773762737, 56727.7597802072],
    [0.00000000129, 6.25921091941, 636.9962720242],
    [0.00000000115, 1.32252965584, 133767.65136415116],
    [0.00000000133, 4.67521539134, 2014.9816717978],
    [0.00000000129, 1.33388095635, 107679.74822257696],
    [0.0000000011, 0.53548270033, 189386.03259226496],
    [0.00000000138, 3.7487134419, 25132.3033999656],
    [0.00000000104, 6.20631255702, 137678.191299471],
    [0.00000000136, 4.33626380346, 158746.17595363196],
    [0.0000000014, 4.7704656548, 51962.5071877104],
    [0.00000000107, 5.13911198869, 154194.22245657316],
    [0.00000000099, 3.20111538784, 50593.84693486539],
    [0.00000000115, 4.23657111769, 29530.4780865396],
    [0.00000000099, 2.96900537666, 1375.7737998458],
    [0.00000000098, 0.25974575144, 160.40736938481],
    [0.00000000112, 5.13615308641, 1135.6768718932],
    [0.00000000103, 0.03739853961, 180.0771302846],
    [0.00000000127, 4.06135620339, 25234.70675982219],
    [0.00000000126, 5.38825914627, 50579.61984086379],
    [0.00000000092, 3.86460670288, 1478.8665740644],
    [0.00000000103, 0.50848351253, 128320.75184749259],
    [0.00000000105, 5.78250231569, 25938.3399444396],
    [0.000000001, 3.17805119728, 168959.46149984296],
    [0.00000000092, 3.11940116326, 101703.15774082378],
    [0.00000000086, 5.20145082498, 1485.2907067032],
    [0.00000000096, 3.9681981872, 132350.71519108818],
    [0.00000000111, 1.34533801057, 81591.84508100279],
    [0.0000000011, 1.79616313197, 51066.427731055],
    [0.00000000082, 5.43382342505, 24609.0365675098],
    [0.00000000085, 6.2061314324, 195047.36464141717],
    [0.00000000081, 2.17304015873, 103925.01437542078],
    [0.00000000082, 1.35191047385, 55503.94193942859],
    [0.00000000085, 1.58809368186, 35472.7441496494],
    [0.00000000077, 5.37009054591, 25668.418497699],
    [0.00000000081, 4.04156889584, 51322.60990139639],
    [0.00000000081, 1.00020358257, 9745.3205558566],
    [0.00000000091, 0.67150657677, 26301.2022370122],
    [0.00000000073, 2.26101257507, 159.3017347922],
    [0.00000000083, 3.80217358162, 54087.0057663656],
    [0.00000000074, 0.67172968417, 61560.64729122359],
    [0.00000000081, 4.54881374632, 24925.4284371664],
    [0.00000000068, 1.76241514876, 205260.65018762814],
    [0.00000000091, 2.76261744894, 148532.89040742096],
    [0.00000000066, 1.34963514373, 29416.03879785439],
    [0.00000000077, 2.57054641686, 123554.36581794015],
    [0.00000000065, 1.32385028526, 159855.55450572536],
    [0.00000000075, 2.73085123584, 11.0457002639],
    [0.00000000065, 2.55838701753, 157483.01859105378],
    [0.00000000067, 0.95617774715, 27676.976036858],
    [0.00000000063, 6.23518209598, 167850.0829477496],
    [0.00000000063, 5.32629690379, 50696.93970908399],
    [0.00000000061, 4.71096182293, 103.7821885806],
    [0.00000000062, 5.02418221736, 151975.46535238638],
    [0.00000000085, 5.69623244387, 52026.2430860138],
    [0.00000000069, 2.8145962205, 77197.21394753258],
    [0.0000000008, 2.55956722969, 25654.19140369739],
    [0.00000000061, 2.56193927689, 149642.26895951436],
    [0.00000000072, 0.14850226968, 24712.1293417284],
    [0.00000000065, 4.8597173122, 25131.61398560359],
    [0.00000000061, 4.77146841758, 171004.7700326452],
    [0.00000000059, 0.28619274171, 126067.63934109679],
    [0.00000000078, 5.59611604424, 174620.79354899516],
    [0.00000000067, 6.04453580152, 647.0108333148],
    [0.00000000058, 2.2002022296, 29428.515568274],
    [0.00000000058, 0.23406889796, 99979.7361995226],
    [0.00000000067, 1.51266773169, 6044.2285813754],
    [0.00000000066, 4.25592670294, 51013.33157874059],
    [0.00000000056, 1.16937416327, 183724.7005431128],
    [0.00000000054, 2.13111434237, 323.5054166574],
    [0.0000000007, 2.58203216794, 97466.46267636596],
    [0.00000000064, 2.47150854758, 51742.09454527159],
    [0.00000000061, 1.63440457571, 61.7259747402],
    [0.00000000058, 5.59546551531, 13675.5302520762],
    [0.00000000068, 5.80324376308, 77211.44104153418],
    [0.00000000062, 5.36783084125, 51756.3216392732],
    [0.00000000057, 5.54044463506, 45405.0956819028],
    [0.00000000049, 4.72252968053, 5193.3670587978],
    [0.00000000051, 0.74975148256, 2703.6161546756],
    [0.00000000049, 2.24548271996, 425.908776514],
    [0.00000000056, 4.37556816411, 164721.69418265377],
    [0.00000000067, 5.06883180043, 73.297125859],
    [0.00000000055, 5.32884597033, 846.0828347512],
    [0.00000000053, 2.59058383208, 71378.55953479178],
    [0.00000000056, 0.20829554362, 76681.75007643958],
    [0.0000000005, 0.69586394386, 25455.119402261],
    [0.00000000047, 3.82904845731, 136100.84775702318],
    [0.00000000063, 1.00869533728, 48835.19385644859],
    [0.00000000046, 0.58744970432, 1243.4876016784],
    [0.00000000049, 4.31462243651, 52705.49724824299],
    [0.00000000054, 4.71709628195, 51219.51712717779],
    [0.00000000044, 2.50076848015, 155468.036919256],
    [0.00000000044, 2.39025344606, 199599.31813847594],
    [0.00000000053, 2.99045850793, 23866.04650697719],
    [0.0000000005, 0.18111741831, 6129.2970395066],
    [0.00000000058, 0.05416624133, 50800.03248330259],
    [0.00000000044, 0.10811830506, 2221.856634597],
    [0.00000000049, 2.59326204458, 6720.7139793414],
    [0.00000000048, 2.06527170284, 94138.32702008578],
    [0.00000000041, 3.09092697016, 154938.34595416137],
    [0.00000000048, 3.72689025804, 27999.1026247914],
    [0.00000000039, 2.99153100887, 221135.26778299137],
    [0.00000000047, 3.33954014098, 76667.52298243798],
    [0.00000000041, 3.8996671137, 104351.61256629678],
    [0.00000000044, 3.80797277346, 139428.98341330336],
    [0.0000000004, 1.74912661656, 23869.1460373874],
    [0.00000000052, 5.24035062888, 94329.77528619739],
    [0.00000000038, 2.58408369314, 19202.75325164339],
    [0.00000000043, 1.54002039641, 138633.7910410796],
    [0.00000000041, 0.13043784436, 170068.84005193636],
    [0.00000000041, 1.97188559338, 1162.4747044078],
    [0.00000000042, 0.22106128451, 742.9900605326],
    [0.00000000044, 2.13998084682, 3492.5715668696],
    [0.00000000038, 2.59250751887, 45290.65639321759],
    [0.00000000039, 1.1627203378, 210921.98223678037],
    [0.00000000041, 2.75338962257, 103711.71527998279],
    [0.00000000037, 6.26592309401, 202.2533951741],
    [0.00000000036, 5.20134406544, 177287.84588263658],
    [0.00000000041, 6.08027836846, 58458.88213313979],
    [0.00000000036, 1.90488706537, 3308.4658953804],
    [0.00000000046, 1.47285489874, 4022.2625319642],
    [0.00000000035, 0.02396543339, 90989.16285949759],
    [0.00000000034, 3.05681901713, 2820.8311441262],
    [0.00000000041, 0.48906225367, 77410.51304297059],
    [0.00000000034, 0.1601051888, 72602.37737557039],
    [0.00000000038, 3.81527519162, 8989.46770543239],
    [0.00000000036, 5.85615720173, 87648.55043279778],
    [0.00000000035, 3.14705573027, 23976.2528281966],
    [0.00000000044, 6.00455231495, 19958.6061020676],
    [0.00000000044, 3.81869448484, 113341.08027172917],
    [0.00000000038, 0.17933969624, 73891.83305794839],
    [0.00000000039, 2.65772117387, 49953.94964855139],
    [0.00000000032, 2.35469869139, 2383.1930147762],
    [0.00000000033, 3.61353117735, 215473.93573383917],
    [0.00000000032, 6.24015692589, 2111.6503133776],
    [0.00000000032, 4.14163454718, 2686.7220945412],
    [0.00000000035, 3.82836982492, 87253.17713015496],
    [0.00000000038, 3.98892541543, 1300.826818205],
    [0.00000000036, 0.18451121701, 51543.0225438352],
    [0.00000000032, 3.80353109755, 165516.88655487756],
    [0.00000000035, 0.65070005396, 1535.9767429694],
    [0.00000000044, 3.08976502046, 8014.198202924],
    [0.00000000038, 0.38543000653, 515.463871093],
    [0.0000000003, 2.57510644529, 175730.17210108857],
    [0.0000000003, 0.66745796739, 127791.06088239799],
    [0.00000000037, 0.34927181699, 44937.1306915484],
    [0.00000000029, 2.52212486456, 1353.7487450168],
    [0.00000000033, 4.28017426572, 24079.34560241519],
    [0.0000000004, 0.56841286621, 190495.41114435834],
    [0.00000000033, 4.51080770987, 3776.4308857348],
    [0.00000000031, 3.46214436814, 25551.09862947879],
    [0.00000000032, 6.12776059481, 26011.6370702986],
    [0.00000000028, 0.99927277404, 1322.6776475314],
    [0.00000000031, 5.86715902954, 5815.11085963699],
    [0.00000000029, 3.36825888222, 66941.04532641819],
    [0.00000000027, 5.36078058708, 412.3710968744],
    [0.00000000026, 2.46930057199, 98068.53671630539],
    [0.00000000028, 0.07626870508, 1265.5674786264],
    [0.00000000036, 6.0254494009, 103821.92160120218],
    [0.00000000032, 1.12362303179, 625.6701923124],
    [0.00000000027, 1.23585314301, 53.0961523144],
    [0.00000000031, 4.69396724922, 11610.5519583742],
    [0.00000000029, 0.36740815179, 152155.54248267098],
    [0.00000000027, 4.08529798989, 50167.24874398939],
    [0.00000000025, 3.03374058582, 39743.7636327506],
    [0.00000000027, 1.45499276326, 148.0787244263],
    [0.00000000024, 0.69157355228, 32132.1317229496],
    [0.00000000025, 1.14593115487, 190809.59732422797],
    [0.00000000024, 3.83323424111, 61165.27398858079],
    [0.00000000024, 2.89344163642, 119784.56349110538],
    [0.00000000033, 4.32125126673, 23888.81579828719],
    [0.00000000023, 0.74123524716, 26514.5013324502],
    [0.00000000026, 6.09390493471, 58220.0348645238],
    [0.00000000027, 0.80346789123, 2698.4514473772],
    [0.00000000023, 1.44496012077, 5687.630368952],
    [0.00000000026, 3.90356572445, 97670.38771289718],
    [0.00000000024, 4.51472586126, 184834.07909520617],
    [0.00000000024, 2.8456791356, 50064.15596977079],
    [0.00000000023, 0.39749554533, 143961.2671494624],
    [0.00000000024, 0.41601485306, 76571.54375522019],
    [0.00000000025, 5.04645137257, 155303.60100866656],
    [0.00000000022, 4.8387077073, 231348.55332920235],
    [0.00000000023, 3.51730051503, 15406.65260500879],
    [0.00000000025, 6.23518211863, 13362.4497067992],
    [0.00000000022, 1.39463873909, 952.0766232596],
    [0.00000000022, 3.04674063292, 9123.5767550174],
    [0.00000000028, 1.37381287166, 309.2783226558],
    [0.00000000022, 5.33689488635, 1485.9801210652],
    [0.00000000022, 1.98895109524, 7392.4544020848],
    [0.00000000021, 4.22299471633, 237009.88537835455],
    [0.00000000021, 2.95153416842, 145872.4666326796],
    [0.00000000022, 5.70851933792, 2840.500905026],
    [0.00000000023, 3.62152465067, 5635.0337293524],
    [0.00000000029, 5.08480222568, 2008.557539159],
    [0.00000000023, 5.06567731687, 103127.79472551816],
    [0.0000000002, 4.02525567691, 6191.0230142468],
    [0.00000000021, 0.56207889559, 1795.258443721],
    [0.0000000002, 2.54609126494, 151.0476698429],
    [0.00000000027, 5.05559260512, 129215.69786709236],
    [0.00000000025, 5.43422956232, 2.9689454166],
    [0.00000000027, 5.13059682664, 12382.0460284936],
    [0.0000000002, 4.2593198234, 51639.00177105299],
    [0.0000000002, 2.62628682595, 164.43591058941],
    [0.0000000002, 3.01217302952, 163766.0944410452],
    [0.00000000028, 1.2744434563, 7860.4193924392],
    [0.00000000021, 0.64536419995, 61279.713277266],
    [0.0000000002, 0.68567124507, 42.8830749034],
    [0.00000000022, 2.63315058351, 7768.3665566946],
    [0.00000000019, 4.61527948882, 2974.609954611],
    [0.00000000026, 6.03903829879, 52099.5402118728],
    [0.00000000019, 1.45371397335, 1272.6810256272],
    [0.0000000002, 5.0965295677, 84307.93800609799],
    [0.00000000018, 2.62575966136, 24292.64469785319],
    [0.0000000002, 3.1001950954, 838.9692877504],
    [0.00000000018, 1.56610210742, 197092.67317421938],
    [0.00000000022, 0.71256272418, 959.1228599576],
    [0.00000000018, 1.52837590084, 107.3053069296],
    [0.00000000024, 3.63932590824, 154408.65498906677],
    [0.00000000018, 4.34458927611, 75085.56363415498],
    [0.00000000021, 0.58707293143, 95.9792272178],
    [0.0000000002, 2.24284863633, 25619.9381512198],
    [0.0000000002, 5.52520867267, 9591.5417453718],
    [0.0000000002, 2.62837055735, 25344.9130810416],
    [0.00000000018, 3.83005472039, 35077.37084700659],
    [0.00000000019, 4.20922499404, 24601.92302050899],
    [0.00000000018, 5.83348216244, 293.4107843772],
    [0.00000000019, 5.18601674976, 2544.6726368924],
    [0.00000000019, 1.79653943961, 89.485747846],
    [0.0000000002, 5.93006048006, 11852.355063399],
    [0.00000000019, 3.72097276077, 6885.14988993081],
    [0.0000000002, 4.20867541511, 2125.8774073792],
    [0.0000000002, 0.11288888192, 47803.9299163742],
    [0.00000000019, 0.91348099128, 26720.68688088739],
    [0.00000000022, 5.13536613115, 23962.02573419499],
    [0.00000000016, 5.07254869262, 77039.89158394396],
    [0.00000000016, 2.65062087486, 191.4482661116],
    [0.00000000016, 5.0481098383, 181391.50415024077],
    [0.00000000016, 1.7992145585, 19336.86230122839],
    [0.00000000017, 0.77517109139, 184526.5214742366],
    [0.00000000016, 2.41160182195, 226796.59983214355],
    [0.00000000016, 4.53670173929, 2667.0523336414],
    [0.00000000017, 3.38382445906, 25863.55834587229],
    [0.00000000018, 2.83882522313, 93696.66034953119],
    [0.00000000017, 1.20281049762, 31415.379249957],
    [0.00000000016, 2.14371296186, 26.2983197998],
    [0.0000000002, 5.58915267196, 1423.564731963],
    [0.00000000015, 2.50331253097, 101173.46677572919],
    [0.00000000015, 4.27322043948, 117.3198682202],
    [0.00000000015, 2.61010767947, 7830.0925314348],
    [0.00000000018, 5.27782764851, 25565.3257234804],
    [0.00000000016, 3.38898448042, 1905.4647649404],
    [0.00000000018, 1.47354192067, 78050.41032928458],
    [0.00000000016, 0.54134832445, 29550.14784743939],
    [0.00000000014, 6.06556744712, 247223.17092456558],
    [0.00000000014, 5.35774038541, 896.0794566554],
    [0.00000000017, 4.58617765238, 50049.92887576919],
    [0.00000000014, 5.64389263074, 183570.921732628],
    [0.00000000019, 3.34153221758, 25440.89230825939],
    [0.00000000014, 2.51895815744, 50380.54783942739],
    [0.00000000014, 2.12886866049, 299.1263942692],
    [0.00000000014, 4.54182695414, 164407.50800278416],
    [0.00000000015, 0.66055337098, 76041.85279012559],
    [0.00000000016, 1.56088804848, 114.3991069134],
    [0.00000000015, 0.01962310496, 119002.41232088137],
    [0.00000000019, 4.91561037107, 277.0349937414],
    [0.00000000013, 1.68168570902, 24815.222115947],
    [0.00000000018, 1.82828509899, 206370.02873972157],
    [0.00000000013, 5.97366656601, 48997.6604925808],
    [0.00000000013, 3.83608241299, 191604.78969645177],
    [0.00000000014, 1.73651187343, 2912.8839798708],
    [0.00000000015, 3.12808384217, 173.44857138459],
    [0.00000000013, 2.93774353095, 533.6231183577],
    [0.00000000013, 5.22559016457, 130012.91751699499],
    [0.00000000015, 0.9154524531, 1577.3435424478],
    [0.00000000016, 0.76587038276, 557.4507382004],
    [0.00000000015, 0.93774708323, 461.3364314544],
    [0.00000000017, 0.62978939191, 5131.6410840576],
    [0.00000000014, 0.00314466415, 171178.21860402977],
    [0.00000000012, 1.38408689559, 4885.8094378282],
    [0.00000000013, 3.87267980031, 50689.82616208319],
    [0.00000000016, 0.75192652724, 22909.7573510066],
    [0.00000000014, 3.28577172415, 51528.79544983359],
    [0.00000000013, 3.02939942251, 193937.9860893238],
    [0.00000000014, 5.14050840336, 726.4820198702],
    [0.00000000017, 0.00978348633, 145090.31546245556],
    [0.00000000012, 0.0256610182, 21716.0267748],
    [0.00000000012, 2.94598982599, 5039.588248313],
    [0.00000000015, 2.53595987022, 51432.81622261579],
    [0.00000000012, 0.47815340421, 1045.1548361876],
    [0.00000000013, 1.45108464566, 185943.45764729957],
    [0.00000000013, 4.2466577573, 209812.60368468694],
    [0.00000000013, 1.24212367708, 4437.51420837359],
    [0.00000000011, 4.48128673146, 6751.0408403458],
    [0.00000000011, 1.42626608664, 180282.12559814737],
    [0.00000000011, 4.36041439935, 55618.3812281138],
    [0.00000000013, 2.57664086838, 1116.4920990942],
    [0.00000000011, 5.45730251636, 252884.50297371778],
    [0.00000000012, 2.39770771184, 25138.7275326044],
    [0.00000000015, 0.96396000353, 35833.2236974308],
    [0.00000000011, 0.02776451147, 92914.50917930716],
    [0.00000000012, 2.91013469983, 196156.74319351057],
    [0.00000000013, 3.25529331759, 117077.06600107178],
    [0.00000000011, 0.15116975094, 1063.3140834523],
    [0.00000000013, 1.92207364074, 2962.880601775],
    [0.00000000011, 5.07320626278, 50951.98844236979],
    [0.00000000011, 1.32523872592, 25241.820306823],
    [0.00000000012, 1.81845040478, 178063.3684939606],
    [0.00000000012, 3.38261371101, 103498.41618454478],
    [0.00000000011, 5.43581617959, 4398.17468657401],
    [0.00000000011, 5.46725635691, 225687.22128005017],
    [0.0000000001, 0.53907131418, 34082.4315835984],
    [0.00000000011, 0.30024939263, 76152.05911134499],
    [0.0000000001, 5.02934387609, 63.7358983034],
    [0.00000000014, 4.61702206834, 16028.396405848],
    [0.00000000014, 0.09133406732, 138.5174968707],
    [0.00000000014, 3.35088380525, 51951.46148744649],
    [0.00000000013, 2.21304135803, 287.8878600698],
    [0.00000000014, 2.17544501087, 2506.6449642566],
    [0.0000000001, 5.55465957426, 139589.3907826882],
    [0.00000000014, 1.74381856487, 36.6485629295],
    [0.00000000012, 2.869185171, 2045.3085328022],
    [0.00000000014, 6.10459624713, 454.9093665273],
    [0.00000000012, 2.77211422594, 76137.83201734339],
    [0.00000000011, 1.99827759086, 1088.603156601],
    [0.00000000011, 3.22180369175, 1055.4497769261],
    [0.0000000001, 4.45423293249, 5469.8837830406],
    [0.0000000001, 3.80828716302, 210614.42461581077],
    [0.00000000011, 2.46917665402, 78114.14622758799],
    [0.00000000009, 1.45328603093, 50903.1252575212],
    [0.00000000009, 5.54893452073, 18207.81398823521],
    [0.00000000009, 4.02738735208, 153878.9640239722],
    [0.00000000012, 5.93924350634, 24182.4383766338],
    [0.00000000009, 1.62979010556, 88476.99497093359],
    [0.00000000012, 0.32153547669, 26610.48055966799],
    [0.00000000009, 1.19398508932, 51329.7234483972],
    [0.0000000001, 5.18315351919, 1382.1979324846],
    [0.00000000009, 1.01085679373, 263097.78851992876],
    [0.00000000009, 2.00067925425, 203375.74902421076],
    [0.00000000012, 5.83966176266, 11790.6290886588],
    [0.00000000009, 4.21791555507, 216897.50046580215],
    [0.0000000001, 1.37373365491, 18043.37807764579],
    [0.0000000001, 2.99316128078, 1073.6090241908],
    [0.00000000009, 0.28434529807, 5019.9184874132],
    [0.0000000001, 4.20422857494, 24822.3356629478],
    [0.0000000001, 2.29548861266, 1211.341070359],
    [0.00000000009, 1.25682220533, 134877.02991624456],
    [0.0000000001, 4.16632261841, 1130.1539475858],
    [0.00000000009, 5.34544245605, 77.7505439839],
    [0.00000000008, 5.22017010853, 54879.422437824],
    [0.00000000009, 4.05371044357, 50910.238804522],
    [0.00000000009, 0.40685098884, 241561.83887541335],
    [0.00000000008, 0.40730399, 5852.7803152638],
    [0.00000000011, 3.72922161246, 53235.18821333759],
    [0.00000000009, 6.2813903505, 13655.8604911764],
    [0.0000000001, 1.96785599087, 120417.67842777158],
    [0.00000000009, 5.06459359435, 24864.08530079559],
    [0.0000000001, 4.71864870979, 1865.2314025176],
    [0.00000000011, 0.33942008091, 2352.8661537718],
    [0.00000000008, 6.15215489548, 181026.24909573558],
    [0.0000000001, 3.84482406254, 199.0720014364],
    [0.0000000001, 3.05711078565, 12098.1867096284],
    [0.0000000001, 2.77702246346, 67608.75720795698],
    [0.00000000008, 0.01376496883, 197266.12174560397],
    [0.00000000009, 2.26243799037, 3178.1457905676],
    [0.00000000008, 1.78435325528, 4743.4017631704],
    [0.00000000008, 0.38732252117, 127261.36991730338],
    [0.00000000009, 2.5629003562, 103299.34418310839],
    [0.00000000009, 4.84412662255, 120226.23016165999],
    [0.00000000007, 5.3953090617, 1168.8988370466],
    [0.00000000008, 5.69088083633, 103285.11708910679],
    [0.00000000008, 5.54874226308, 181555.94006083018],
    [0.00000000008, 5.62174524692, 165677.29392426237],
    [0.0000000001, 4.58306790875, 22065.64060961],
    [0.00000000009, 0.73496122175, 17605.7399482958],
    [0.00000000008, 3.58543298077, 1169.5882514086],
    [0.00000000007, 1.26561248383, 108789.12677467037],
    [0.0000000001, 3.27598203241, 102769.65321801379],
    [0.00000000008, 4.21855566823, 212031.36078887375],
    [0.00000000009, 0.48166296597, 4571.62325795859],
    [0.00000000007, 3.67234997933, 32769.1279949738],
    [0.00000000007, 5.79249707844, 129799.61842155698],
    [0.00000000007, 0.03121461305, 66826.60603773296],
    [0.00000000009, 3.26441151062, 23549.6546373206],
    [0.00000000009, 0.19367044019, 102755.42612401219],
    [0.00000000008, 0.62277792426, 162188.75089859738],
    [0.00000000008, 3.34882273958, 92.0528357446],
    [0.00000000008, 4.27430002172, 80967.3255793982],
    [0.00000000007, 1.46750727595, 28206.6670019526],
    [0.0000000001, 1.24786123351, 160964.93305781877],
    [0.00000000008, 5.49842622508, 113501.48764111398],
    [0.00000000009, 5.63483675546, 50270.341518208],
    [0.00000000008, 2.05110792176, 76784.84285065818],
    [0.00000000008, 0.92690481326, 77101.23472031478],
    [0.00000000007, 5.28909946835, 82815.66292178139],
    [0.00000000008, 3.06864527789, 171960.36977425378],
    [0.00000000008, 3.92272784242, 380.12776796],
    [0.00000000007, 2.8874246572, 12900.0076407522],
    [0.00000000007, 5.53061544865, 77829.99768684579],
    [0.00000000008, 1.24484681004, 187052.83619939297],
    [0.00000000007, 6.05941612782, 51653.22886505459],
    [0.00000000007, 3.30519117056, 7300.4015663402],
    [0.00000000008, 5.9672107942, 394.2676680502],
    [0.00000000007, 1.33204692596, 1853.5020496816],
    [0.00000000007, 4.30366173071, 74923.09699802278],
    [0.00000000007, 3.45810436495, 41494.55574658299],
    [0.00000000007, 0.15451350311, 4371.8763667742],
    [0.00000000007, 1.86522179927, 15252.873794524],
    [0.00000000008, 5.196361135, 543.9180590962],
    [0.00000000007, 3.82479004639, 110395.84114767218],
    [0.00000000007, 1.63126997002, 257436.45647077652],
    [0.00000000007, 5.26172595194, 860.3099287528],
    [0.00000000006, 1.11657173493, 130439.51570787099],
    [0.00000000007, 1.68718638559, 77307.42026875199],
    [0.00000000006, 2.14881184954, 728.762966531],
    [0.00000000007, 3.84691649628, 113736.45357437199],
    [0.00000000006, 2.91929218734, 935.92998070881],
    [0.00000000007, 3.01424729728, 77630.92568540938],
    [0.00000000006, 2.15247839059, 1397.2664121632],
    [0.00000000006, 4.74604830516, 31281.270200372],
    [0.00000000007, 1.2829057419, 25764.39772491679],
    [0.00000000007, 4.92248259678, 25771.5112719176],
    [0.00000000008, 3.99904621999, 775.522611324],
    [0.00000000007, 0.74308878469, 2748.4480692814],
    [0.00000000006, 2.73305523934, 25042.7483053866],
    [0.00000000006, 1.62741283897, 23113.2931869632],
    [0.00000000006, 2.09068955703, 11476.44290878919],
    [0.00000000006, 2.27085847993, 77154.33087262919],
    [0.00000000008, 5.87507125718, 5753.3848848968],
    [0.00000000006, 0.53751478869, 929.30142180879],
    [0.00000000006, 2.96171401327, 25024.58905812189],
    [0.00000000007, 2.13378754051, 77844.22478084739],
    [0.00000000006, 1.86194409563, 49424.25868345679],
    [0.00000000006, 3.68198034085, 242671.21742750678],
    [0.00000000005, 5.98628616856, 1685.0521225016],
    [0.00000000005, 0.41232722852, 268759.12056908093],
    [0.00000000007, 3.48442898019, 216583.31428593257],
    [0.00000000005, 2.04228994853, 184.1056714892],
    [0.00000000006, 0.65037087428, 2751.5475996916],
    [0.00000000007, 3.103981002, 222244.64633508475],
    [0.00000000006, 3.0732872856, 76887.93562487679],
    [0.00000000005, 1.83833182809, 49957.0491789616],
    [0.00000000006, 2.49430451135, 150751.64751160776],
    [0.00000000006, 0.06169519623, 3278.139034376],
    [0.00000000007, 6.07758863956, 28791.5192962498],
    [0.00000000006, 5.63446524134, 525.7588118315],
    [0.00000000006, 3.63729089275, 4525.655177259],
    [0.00000000005, 4.39160168574, 8969.7979445326],
    [0.00000000005, 2.24102019036, 278972.40611529193],
    [0.00000000005, 5.11538239022, 207479.40729181495],
    [0.00000000007, 6.26774850121, 71.8126531507],
    [0.00000000005, 2.17240613044, 17893.6278083656],
    [0.00000000005, 1.27106449019, 82701.22363309616],
    [0.00000000006, 4.79489839099, 232457.93188129575],
    [0.00000000005, 3.1821407869, 107055.22872097239],
    [0.00000000005, 1.89171354045, 13525.2745599404],
    [0.00000000005, 4.64563873402, 223180.57631579356],
    [0.00000000005, 1.91008067074, 76777.72930365738],
    [0.00000000005, 2.50319862806, 124663.74437003357],
    [0.00000000005, 3.89569295343, 11348.9624181042],
    [0.00000000005, 5.39423327016, 124156.43985787958],
    [0.00000000006, 5.29807766224, 25977.69682035479],
    [0.00000000005, 2.87778566689, 51226.63067417859],
    [0.00000000005, 0.44858429852, 180496.558130641],
    [0.00000000005, 4.06926779268, 51220.20654153979],
    [0.00000000005, 3.80809157401, 102239.96225291918],
    [0.00000000007, 5.55378696106, 39763.43339365039],
    [0.00000000005, 5.75838182105, 26013.1215430069],
    [0.00000000006, 2.8867156199, 23762.9537327586],
    [0.00000000005, 6.20102018155, 12546.481939083],
    [0.00000000005, 6.1109964281, 2538.2485042536],
    [0.00000000005, 2.67642789762, 238.847268616],
    [0.00000000005, 0.65885045239, 78793.40038981718],
    [0.00000000005, 2.70147990781, 41520.8540663828],
    [0.00000000006, 0.11971646897, 25014.29411738339],
    [0.00000000005, 1.43154749679, 1368.660252845],
    [0.00000000005, 4.18306280234, 64741.95798313119],
    [0.00000000005, 3.47909589197, 204331.34876581936],
    [0.00000000005, 6.22910975317, 1749.2758384074],
    [0.00000000005, 2.78506319581, 129909.82474277639],
    [0.00000000005, 3.56524182403, 15344.9266302686],
    [0.00000000005, 6.24549779965, 2422.682140718],
    [0.00000000006, 2.98310063938, 49637.55777889479],
    [0.00000000005, 3.29832027302, 147.15025158482],
    [0.00000000004, 2.70995469955, 825.5192332282],
    [0.00000000005, 0.02729218827, 40738.70289615879],
    [0.00000000005, 2.85706849641, 273311.0740661397],
    [0.00000000004, 2.5248866385, 1155.361157407],
    [0.00000000005, 0.959542386, 10854.69910794999],
    [0.00000000006, 0.01304623482, 14650.79975458459],
    [0.00000000006, 0.2747185938, 175.1660598002],
    [0.00000000005, 0.44009449166, 25466.159340735],
    [0.00000000005, 5.18936496219, 158438.6183326624],
    [0.00000000006, 6.17425273553, 25032.45336464809],
    [0.00000000005, 3.14062192088, 1711.4525920328],
    [0.00000000004, 3.83353770293, 430.5303441391],
    [0.00000000004, 2.6408836654, 21562.2479643152],
    [0.00000000005, 0.02206162232, 51102.19725895759],
    [0.00000000005, 2.63540728587, 51130.65144696079],
    [0.00000000005, 2.50284716612, 1273.8144626828],
    [0.00000000005, 5.49479077639, 227905.97838423698],
    [0.00000000005, 0.13230127272, 7636.8245950082],
    [0.00000000006, 5.74437254081, 27819.0254945068],
    [0.00000000004, 0.73607384525, 16703.062133499],
    [0.00000000004, 3.59950804683, 4244.3958760892],
    [0.00000000006, 2.48689062385, 176839.55065318197],
    [0.00000000004, 4.82239445124, 755.8528504242],
    [0.00000000004, 4.39652932176, 2994.2797155108],
    [0.00000000005, 3.16067097567, 6087.9302400282],
    [0.00000000005, 1.77435598736, 45424.76544280259],
    [0.00000000005, 6.24432577848, 981.8980614084],
    [0.00000000004, 1.99008311329, 1102.2650050926],
    [0.00000000004, 1.93501717675, 159394.218074271],
    [0.00000000004, 5.78878202617, 71492.99882347698],
    [0.00000000004, 0.27146752401, 962.7132886094],
    [0.00000000005, 6.07660508261, 51120.35650622229],
    [0.00000000004, 0.66780415298, 7546.2332125696],
    [0.00000000005, 1.007192586, 51852.30086649099],
    [0.00000000004, 5.15337414779, 1416.93617306299],
    [0.00000000004, 2.42365549931, 1471.7530270636],
    [0.00000000005, 2.86403891806, 51112.49219969609],
    [0.00000000004, 4.53571524987, 26404.2950112308],
    [0.00000000005, 2.57380563125, 13518.22832324239],
    [0.00000000004, 0.59001083214, 236702.32775738495],
    [0.00000000004, 0.05700791334, 75512.16182503098],
    [0.00000000004, 1.42726546575, 5968.88967012179],
    [0.00000000005, 3.93526974161, 2660.4237747414],
    [0.00000000004, 0.63596096739, 123758.29085447139],
    [0.00000000004, 0.49893341795, 102225.73515891758],
    [0.00000000005, 5.43891222847, 87413.5844995398],
    [0.00000000005, 1.46091109112, 4578.2518168586],
    [0.00000000004, 2.32879511695, 23336.3555418826],
    [0.00000000004, 6.13396070315, 77616.69859140778],
    [0.00000000004, 0.32413289574, 2324.9494088156],
    [0.00000000004, 3.03541350092, 35211.47989659159],
    [0.00000000004, 2.56106517052, 1699.2792165032],
    [0.00000000005, 1.8920652708, 8298.0575217892],
    [0.00000000005, 2.98862135372, 422.385658165],
    [0.00000000004, 0.5643391726, 8328.3843827936],
    [0.00000000004, 4.81742740138, 21509.65132471559],
    [0.00000000005, 6.07222408476, 11296.36577850459],
    [0.00000000004, 3.51107213215, 102659.44689679438],
    [0.00000000004, 0.59917878687, 422.6660376129],
    [0.00000000004, 4.59274150931, 792.4166714584],
    [0.00000000004, 2.99270484448, 178243.44562424519],
    [0.00000000004, 4.33353134848, 28421.0995344462],
    [0.00000000004, 1.26899736976, 213140.73934096715],
    [0.00000000004, 0.10914707748, 26727.8004278882],
    [0.00000000004, 5.32376467784, 26507.38778544939],
];

const L1: &[Term] = &[
    [26087.9031415742, 0.0, 0.0],
    [0.00000352015, 3.05256012304, 1109.3785520934],
    [0.00000049849, 5.62136983203, 5661.3320491522],
    [0.0000002204, 0.86535331215, 955.5997416086],
    [0.00000018295, 5.72185081605, 4551.9534970588],
    [0.00000016636, 1.34797798506, 529.6909650946],
    [0.00000015398, 5.74264192868, 19.66976089979],
    [0.00000012621, 3.89529759244, 3.881335358],
    [0.00000012564, 1.79477343976, 11322.6640983044],
    [0.00000011638, 4.69783856223, 1059.3819301892],
    [0.00000006841, 2.77391361519, 7.1135470008],
    [0.00000006695, 0.51545857853, 21535.9496445154],
    [0.00000006226, 5.53763395449, 6770.7106012456],
    [0.00000007159, 2.97844787441, 2218.7571041868],
    [0.00000004382, 4.94446680998, 213.299095438],
    [0.00000004367, 2.19477345564, 13521.7514415914],
    [0.00000004501, 5.78894837926, 3442.5749449654],
    [0.00000003451, 4.28555466352, 16983.9961474566],
    [0.00000003271, 3.02243420127, 27197.2816936676],
    [0.00000002947, 4.47008141598, 7238.6755916],
    [0.00000003415, 4.56584629545, 25028.521211385],
    [0.00000003013, 5.09598103953, 10213.285546211],
    [0.00000002446, 5.63993676359, 1589.0728952838],
    [0.00000002717, 6.21732670652, 26087.9031415742],
    [0.00000002363, 1.74676260392, 37410.5672398786],
    [0.000000016, 3.57823150097, 24498.8302462904],
    [0.00000001732, 5.17249946517, 426.598190876],
    [0.00000001478, 3.75113677349, 20426.571092422],
    [0.00000001417, 4.25250495472, 43071.8992890308],
    [0.00000001273, 5.515925959, 32858.61374281979],
    [0.00000001017, 0.48874577933, 22645.32819660879],
    [0.00000000895, 3.19034364919, 50586.73338786459],
    [0.00000000976, 2.9849884722, 53285.1848352418],
    [0.00000001002, 1.73738544627, 12432.0426503978],
    [0.00000000815, 3.74886748071, 6283.0758499914],
    [0.00000000754, 4.53432316695, 33326.5787331742],
    [0.00000000731, 6.0539187847, 114.43928868521],
    [0.00000000682, 5.48575748443, 58946.51688439399],
    [0.00000000658, 5.87181159186, 2333.196392872],
    [0.0000000063, 0.46393770994, 48733.23133818299],
    [0.00000000608, 1.21294807306, 153.7788104848],
    [0.00000000547, 0.7841735946, 12566.1516999828],
    [0.00000000522, 2.45626178312, 467.9649903544],
    [0.00000000518, 2.00999556762, 9103.9069941176],
    [0.0000000047, 1.27156485181, 14765.2390432698],
    [0.0000000046, 1.72116552862, 38519.945791972],
    [0.00000000588, 4.18198897001, 639.897286314],
    [0.00000000425, 5.35412166965, 49.9966219042],
    [0.0000000041, 0.90299053546, 27043.5028831828],
    [0.00000000447, 5.59087202619, 57837.1383323006],
    [0.00000000385, 5.00595425657, 36301.18868778519],
    [0.00000000431, 1.46621094091, 1066.49547719],
    [0.00000000369, 2.53252075012, 30639.856638633],
    [0.00000000414, 4.23252814044, 69159.80243060499],
    [0.00000000336, 1.69678010258, 64607.84893354619],
    [0.00000000331, 2.04226862328, 1052.2683831884],
    [0.00000000335, 0.4396646273, 74821.13447975718],
    [0.00000000303, 0.03122946253, 2118.7638603784],
    [0.00000000299, 2.92337275906, 23969.1392811958],
    [0.00000000307, 5.46009027338, 7880.08915333899],
    [0.00000000338, 4.36981150926, 77204.32749453338],
    [0.00000000318, 0.53544069543, 73711.75592766379],
    [0.00000000378, 2.17093267687, 522.5774180938],
    [0.00000000319, 1.13502467029, 41962.5207369374],
    [0.00000000311, 2.97300253174, 28306.66024576099],
    [0.00000000295, 2.99588887014, 15874.6175953632],
    [0.0000000025, 2.953705582, 54394.56338733519],
    [0.00000000231, 0.90716198231, 53131.406024757],
    [0.00000000277, 3.8164090409, 536.8045120954],
    [0.00000000192, 2.40278226388, 50057.04242277],
    [0.00000000232, 4.21934793826, 18093.37469954999],
    [0.00000000181, 2.93173598816, 80482.46652890938],
    [0.00000000184, 2.89365137454, 3328.13565628019],
    [0.00000000215, 5.35297053483, 206.1855484372],
    [0.00000000184, 1.16199334505, 25035.6347583858],
    [0.00000000188, 0.05789909427, 24978.5245894808],
    [0.00000000176, 1.24688141704, 103.0927742186],
    [0.00000000192, 2.20435959266, 65697.55772473979],
    [0.00000000187, 1.75897862722, 89586.37352302698],
    [0.0000000022, 1.64704921206, 25021.4076643842],
    [0.00000000163, 1.68157648268, 90695.75207512038],
    [0.00000000172, 5.49379676928, 85034.42002596818],
    [0.0000000016, 3.53115119422, 20760.4270331914],
    [0.00000000182, 0.27412781014, 419.4846438752],
    [0.0000000016, 1.56900503035, 51109.31080595839],
    [0.0000000014, 3.54014988083, 46848.3301747656],
    [0.00000000158, 1.0834529434, 51123.53789995999],
    [0.0000000014, 0.8960339754, 26617.5941066688],
    [0.00000000156, 3.93678975759, 25661.3049506982],
    [0.00000000143, 4.1870764148, 70269.18098269838],
    [0.00000000148, 5.23740382935, 25448.00585526019],
    [0.00000000161, 4.20704556345, 44181.27784112419],
    [0.00000000135, 2.32937015638, 83925.0414738748],
    [0.00000000124, 5.39429638157, 16066.0658614748],
    [0.00000000122, 0.70817721457, 3340.6124266998],
    [0.00000000135, 5.1271417365, 433.7117378768],
    [0.00000000118, 3.5629073827, 99799.65906923798],
    [0.00000000103, 3.79599170444, 46514.4742339962],
    [0.00000000124, 0.50111524869, 25558.2121764796],
    [0.000000001, 5.26412743663, 51535.90899683439],
    [0.00000000108, 5.41245764561, 51646.11531805379],
    [0.00000000097, 4.16928344076, 96357.08412427259],
    [0.00000000131, 5.96018393136, 1223.81784077861],
    [0.00000000095, 1.13603074159, 103292.23063610759],
    [0.00000000099, 2.97745419587, 105460.99111839019],
    [0.00000000087, 4.79412610447, 115674.27666460119],
    [0.00000000085, 5.20543856772, 220.4126424388],
    [0.00000000086, 1.31906652223, 40853.142184844],
    [0.00000000083, 5.42168212039, 86143.79857806159],
    [0.00000000087, 4.82175933815, 85502.38501632259],
    [0.00000000097, 5.45612387439, 33967.99229491319],
    [0.00000000094, 5.4408252647, 60055.89543648739],
    [0.00000000092, 3.31517882482, 853.196381752],
    [0.0000000008, 1.98021941646, 149.5631971346],
    [0.00000000077, 2.92990690172, 106570.36967048359],
    [0.00000000077, 3.58873337282, 72936.23331633979],
    [0.00000000073, 2.07550251369, 7994.5284420242],
    [0.00000000069, 5.82877824815, 76674.63652943878],
    [0.00000000073, 5.47764263541, 134.109049585],
    [0.00000000068, 0.45769059559, 76144.94556434419],
    [0.00000000065, 5.02099098811, 1911.1994832172],
    [0.00000000074, 2.0684148392, 1596.1864422846],
    [0.00000000065, 4.7366569758, 18849.2275499742],
    [0.00000000079, 4.69401198305, 12725.453434775],
    [0.00000000062, 0.41754403662, 23754.70674870219],
    [0.00000000068, 0.49499072548, 100909.03762133139],
    [0.00000000069, 3.83331450314, 31749.2351907264],
    [0.00000000058, 1.79490992015, 45892.73043315699],
    [0.0000000007, 3.85652783526, 19317.1925403286],
    [0.00000000056, 2.97931239647, 110.2063212194],
    [0.00000000057, 6.02365291826, 131548.89425996438],
    [0.00000000075, 6.12304553376, 19406.6782881746],
    [0.00000000054, 6.18931199292, 66653.15746634839],
    [0.00000000062, 3.8705648553, 52175.8062831484],
    [0.00000000051, 5.41008663881, 112231.70171963578],
    [0.0000000005, 5.1685123953, 42153.969003049],
    [0.00000000055, 6.1682592156, 40565.2543247742],
    [0.00000000061, 4.49973508529, 636.9962720242],
    [0.00000000063, 0.58522249133, 307.5576209696],
    [0.00000000047, 1.65132870113, 13541.42120249119],
    [0.00000000061, 3.69126569333, 641.41356173899],
    [0.00000000047, 4.30503037811, 63498.47038145279],
    [0.00000000053, 5.77882462192, 51116.4243529592],
    [0.00000000051, 3.43429281881, 47623.8527860896],
    [0.00000000053, 0.38489520462, 75930.51303185058],
    [0.0000000006, 6.14064925862, 14477.3511832],
    [0.00000000046, 1.60780651045, 76.2660712756],
    [0.00000000057, 1.05204229208, 24491.71669928959],
    [0.00000000044, 0.36808848398, 102018.41617342478],
    [0.00000000044, 5.11918723751, 91785.46086631398],
    [0.00000000052, 0.4014574293, 49842.60989027639],
    [0.0000000004, 3.97448045262, 9384.8410080752],
    [0.00000000042, 0.38972666383, 1089.7087911936],
    [0.00000000045, 4.18760732936, 121335.60871375339],
    [0.00000000041, 3.09289176904, 5327.4761083828],
    [0.00000000039, 3.30334456809, 39609.6545831656],
    [0.00000000039, 5.98621596207, 59414.4818747484],
    [0.00000000038, 1.55693297851, 24505.94379329119],
    [0.00000000046, 5.12772510476, 35191.8101356918],
    [0.00000000044, 1.64142632892, 1581.959348283],
    [0.00000000035, 5.40563277044, 79373.087976816],
    [0.00000000033, 2.33316170443, 23439.44831610119],
    [0.00000000034, 1.93438952401, 74.7815985673],
    [0.00000000033, 4.1838139193, 122444.98726584678],
    [0.00000000032, 0.9704620383, 147423.51185532758],
    [0.00000000042, 0.74477040035, 50579.61984086379],
    [0.00000000032, 2.51253003066, 6681.2248533996],
    [0.0000000003, 5.72275372855, 579.6875869988],
    [0.00000000036, 1.83441939048, 102762.53967101299],
    [0.00000000029, 0.35382619633, 125887.56221081219],
    [0.00000000038, 1.6075243665, 333.8559407694],
    [0.00000000032, 1.15504481951, 105307.21230790539],
    [0.00000000035, 4.26993768686, 38813.3565763492],
    [0.00000000029, 1.64858873176, 39629.32434406539],
    [0.00000000032, 1.6198228531, 91805.13062721379],
    [0.00000000028, 6.04474259952, 25234.70675982219],
    [0.00000000026, 5.40529119909, 110012.94461544899],
    [0.00000000025, 1.58252257516, 141762.17980617538],
    [0.00000000026, 1.52163912457, 111590.2881578968],
    [0.00000000035, 1.09642324721, 19804.8272915828],
    [0.00000000032, 1.63630152507, 65717.22748563958],
    [0.00000000025, 0.6148137622, 2648.454825473],
    [0.00000000026, 2.41155826607, 8194.2753332086],
    [0.00000000024, 0.36646971687, 128106.31931499895],
    [0.00000000024, 0.82215620694, 314.1861798696],
    [0.00000000024, 6.22552020441, 78263.70942472259],
    [0.00000000025, 1.60651366919, 117893.03376878797],
    [0.00000000024, 1.30542418725, 50593.84693486539],
    [0.00000000024, 6.27026735906, 92741.06060792258],
    [0.00000000022, 0.2858562446, 95247.70557217918],
    [0.00000000023, 3.76541506441, 25668.418497699],
    [0.00000000022, 1.57065958289, 49527.35145767539],
    [0.00000000022, 3.4239152404, 956.2891559706],
    [0.00000000027, 2.92843837974, 32370.9789915656],
    [0.00000000028, 4.24525083155, 647.0108333148],
    [0.00000000022, 4.58185556442, 632.7837393132],
    [0.0000000002, 4.18573865072, 129380.13377768178],
    [0.0000000002, 2.49421617133, 2703.6161546756],
    [0.0000000002, 3.69121427533, 735.8765135318],
    [0.00000000022, 3.22920342008, 1083.0802322936],
    [0.0000000002, 2.81061605673, 157636.79740153858],
    [0.00000000021, 2.37667423315, 79219.3091663312],
    [0.00000000022, 2.65064379452, 56727.7597802072],
    [0.00000000027, 3.72484040647, 621.7438008392],
    [0.00000000019, 2.53191738187, 86457.98475793119],
    [0.0000000002, 5.15598777469, 62389.09182935939],
    [0.0000000002, 4.60232609965, 77197.21394753258],
    [0.00000000019, 6.08023660122, 71980.63357473118],
    [0.00000000021, 2.4898931665, 60370.08161635699],
    [0.00000000022, 2.64762980151, 29530.4780865396],
    [0.00000000021, 5.38581006721, 137210.22630911658],
    [0.00000000021, 1.87418707838, 77734.01845962799],
    [0.00000000018, 6.0747981664, 51322.60990139639],
    [0.00000000018, 1.18055958875, 68050.42387851159],
    [0.00000000023, 1.83236395249, 116783.65521669458],
    [0.00000000018, 2.19593443326, 163298.1294506908],
    [0.00000000021, 1.94768946886, 487.6347512542],
    [0.00000000023, 4.24947848969, 25654.19140369739],
    [0.00000000016, 0.43713509764, 101.9625182656],
    [0.00000000016, 2.89217615461, 29416.03879785439],
    [0.00000000018, 2.88497243514, 55503.94193942859],
    [0.00000000016, 3.71247525503, 10021.8372800994],
    [0.00000000021, 3.23731641928, 6044.2285813754],
    [0.00000000019, 4.16143801363, 51742.09454527159],
    [0.00000000018, 3.67736804895, 51756.3216392732],
    [0.00000000019, 2.85577254219, 107679.74822257696],
    [0.0000000002, 2.87122821926, 81591.84508100279],
    [0.00000000016, 5.76343540713, 14.2270940016],
    [0.00000000016, 6.10040789742, 75615.25459924959],
    [0.00000000016, 3.75399093257, 159.3017347922],
    [0.00000000016, 3.37296539132, 35472.7441496494],
    [0.00000000016, 4.45562454605, 27147.28507176339],
    [0.0000000002, 4.11826642209, 77211.44104153418],
    [0.00000000016, 4.74563827993, 76681.75007643958],
    [0.00000000014, 4.03842178899, 173511.41499690176],
    [0.00000000014, 4.26814937801, 1692.1656695024],
    [0.00000000014, 4.18093429968, 131395.11544947958],
    [0.00000000018, 0.12928659399, 51066.427731055],
    [0.00000000014, 5.45826229781, 138319.60486120995],
    [0.00000000015, 3.92980833248, 77837.11123384659],
    [0.00000000013, 1.47299649457, 111122.32316754239],
    [0.00000000014, 2.84744988968, 133767.65136415116],
    [0.00000000018, 0.07808487985, 2199.087343287],
    [0.00000000015, 0.32184670537, 1162.4747044078],
    [0.00000000016, 2.46354790724, 34282.1784747828],
    [0.00000000012, 2.62533467263, 51962.5071877104],
    [0.00000000012, 1.61792037801, 143980.93691036216],
    [0.00000000014, 2.81825420475, 1639.069517188],
    [0.00000000012, 4.82874020483, 128850.44281258718],
    [0.00000000011, 4.13187099959, 19202.75325164339],
    [0.00000000011, 4.12070571329, 71378.55953479178],
    [0.00000000014, 5.03184181437, 76667.52298243798],
    [0.00000000012, 5.36780303246, 8989.46770543239],
    [0.0000000001, 3.17988432171, 64901.25971792339],
    [0.00000000012, 3.74921282759, 125112.03959948818],
    [0.00000000011, 4.34896488811, 224.3447957019],
    [0.0000000001, 4.33936275875, 95.9792272178],
    [0.00000000013, 4.10652166187, 97466.46267636596],
    [0.00000000011, 5.00123335478, 26301.2022370122],
    [0.00000000011, 4.09304661654, 123554.36581794015],
    [0.00000000011, 3.04942272888, 309.2783226558],
    [0.00000000011, 3.91876229578, 45405.0956819028],
    [0.0000000001, 3.41921519171, 179172.74704605396],
    [0.0000000001, 5.04521421139, 99024.13645791399],
    [0.00000000012, 1.94632930172, 1135.6768718932],
    [0.0000000001, 2.75654212398, 103.7821885806],
    [0.00000000011, 3.264303042, 25874.6040461362],
    [0.00000000009, 4.13054932463, 45290.65639321759],
    [0.00000000009, 5.2388907902, 160.40736938481],
    [0.00000000009, 5.2659479477, 189386.03259226496],
    [0.00000000009, 1.91896018209, 117873.36400788819],
    [0.0000000001, 2.40841912471, 3462.2447058652],
    [0.00000000009, 4.61821269558, 25551.09862947879],
    [0.00000000009, 1.73079867942, 949.1756089698],
    [0.00000000009, 0.1657628405, 23869.1460373874],
    [0.00000000009, 5.14041140506, 80174.90890793978],
    [0.00000000008, 0.46458507594, 11.0457002639],
    [0.00000000008, 2.13831941072, 77623.81213840858],
    [0.00000000008, 0.51533925575, 323.5054166574],
    [0.00000000009, 4.72396658265, 25455.119402261],
    [0.00000000009, 2.4163514493, 61560.64729122359],
    [0.00000000009, 0.34214268803, 38654.05484155699],
    [0.00000000008, 4.94949508683, 1263.15736257819],
    [0.00000000008, 5.20602503064, 106262.81204951399],
    [0.00000000008, 2.72845222952, 112545.88789950538],
    [0.00000000009, 0.2828821637, 153084.84390447979],
    [0.00000000007, 1.18603301975, 23976.2528281966],
    [0.00000000007, 4.58828940895, 137678.191299471],
    [0.00000000007, 3.73851030188, 24609.0365675098],
    [0.00000000008, 5.95900851407, 625.6701923124],
    [0.00000000007, 4.66076658243, 167850.0829477496],
    [0.00000000007, 3.04982232876, 102232.84870591838],
    [0.00000000007, 4.09155893204, 149642.26895951436],
    [0.00000000007, 2.67063315068, 126996.94076290558],
    [0.00000000008, 2.11076683413, 25132.3033999656],
    [0.00000000007, 3.43868822084, 151975.46535238638],
    [0.00000000007, 5.3563051289, 87253.17713015496],
    [0.00000000009, 1.86211772329, 2168.7604822826],
    [0.00000000007, 0.54442534904, 151199.94274106238],
    [0.00000000007, 1.89695735759, 2111.6503133776],
    [0.00000000007, 4.68299502093, 838.9692877504],
    [0.00000000008, 5.34244973342, 113341.08027172917],
    [0.00000000006, 5.88576396223, 183724.7005431128],
    [0.00000000006, 5.36782859765, 61165.27398858079],
    [0.00000000006, 2.47724517579, 32132.1317229496],
    [0.00000000007, 3.29594319406, 132658.27281205778],
    [0.00000000006, 0.38243431524, 29428.515568274],
    [0.00000000008, 3.89322038875, 25565.3257234804],
    [0.00000000007, 5.53048666355, 917.9302859818],
    [0.00000000007, 5.87320327943, 1478.8665740644],
    [0.00000000006, 5.85045331411, 25131.61398560359],
    [0.00000000007, 0.53804683729, 23962.02573419499],
    [0.00000000006, 3.63902971708, 50696.93970908399],
    [0.00000000006, 0.21002985211, 205260.65018762814],
    [0.00000000006, 3.28552145144, 24925.4284371664],
    [0.00000000007, 5.33200163131, 139428.98341330336],
    [0.00000000006, 2.87786400207, 159855.55450572536],
    [0.00000000006, 1.43277262159, 39743.7636327506],
    [0.00000000006, 2.2248464143, 136100.84775702318],
    [0.00000000005, 2.64219851383, 77410.51304297059],
    [0.00000000005, 5.63133224928, 27676.976036858],
    [0.00000000006, 3.74594578355, 846.0828347512],
    [0.00000000007, 4.67721328141, 51543.0225438352],
    [0.00000000007, 5.10645119946, 54087.0057663656],
    [0.00000000006, 0.47748937754, 154194.22245657316],
    [0.00000000007, 0.15300257128, 2014.9816717978],
    [0.00000000006, 5.45690475475, 1243.4876016784],
    [0.00000000006, 2.16523735401, 6885.14988993081],
    [0.00000000005, 3.77559582536, 52705.49724824299],
    [0.00000000006, 5.03053735087, 25440.89230825939],
    [0.00000000007, 1.34170621232, 1731.1223529326],
    [0.00000000005, 0.82871320593, 199599.31813847594],
    [0.00000000006, 2.5226204769, 2125.8774073792],
    [0.00000000005, 5.37318996693, 35077.37084700659],
    [0.00000000005, 1.57258695197, 58220.0348645238],
    [0.00000000005, 4.63950245509, 195047.36464141717],
    [0.00000000005, 0.96289686991, 157483.01859105378],
    [0.00000000005, 3.18786270611, 51013.33157874059],
    [0.00000000005, 0.55904094194, 2383.1930147762],
    [0.00000000005, 5.75279414501, 51219.51712717779],
    [0.00000000005, 0.95192251659, 155468.036919256],
    [0.00000000005, 0.30881710589, 103127.79472551816],
    [0.00000000005, 5.07025385863, 27999.1026247914],
    [0.00000000004, 4.33627478046, 89.485747846],
    [0.00000000005, 2.8002233534, 4437.51420837359],
    [0.00000000005, 1.82284966431, 1884.9011634174],
    [0.00000000004, 0.77378040332, 50064.15596977079],
    [0.00000000005, 6.27191361316, 50049.92887576919],
    [0.00000000004, 6.15270139075, 48835.19385644859],
    [0.00000000004, 4.97402810359, 51528.79544983359],
    [0.00000000005, 1.43143468621, 118828.96374949679],
    [0.00000000004, 0.67727913355, 103925.01437542078],
    [0.00000000004, 0.32122881783, 77039.89158394396],
    [0.00000000005, 5.47064059137, 71582.48457132299],
    [0.00000000004, 1.46002058771, 935.92998070881],
    [0.00000000005, 1.51579415038, 66941.04532641819],
    [0.00000000004, 3.92677612665, 101703.15774082378],
    [0.00000000005, 4.51519425426, 13362.4497067992],
    [0.00000000004, 0.09754463696, 38.1330356378],
    [0.00000000005, 5.65870377214, 1300.826818205],
    [0.00000000004, 0.80000960641, 1485.2907067032],
    [0.00000000005, 0.29612956143, 129215.69786709236],
    [0.00000000004, 5.23377890215, 61279.713277266],
    [0.00000000004, 0.71864596336, 164.43591058941],
    [0.00000000004, 4.83745240235, 103821.92160120218],
    [0.00000000004, 5.33984957388, 165516.88655487756],
    [0.00000000004, 1.51496580365, 99979.7361995226],
    [0.00000000004, 2.05548961851, 215473.93573383917],
    [0.00000000004, 2.71144440911, 4083.9885067044],
    [0.00000000004, 1.69504271974, 742.9900605326],
];

const L2: &[Term] = &[
    [0.00000934669, PI, 0.0],
    [0.00000014892, 4.63351650097, 1109.3785520934],
    [0.00000000975, 1.80597471013, 955.5997416086],
    [0.00000000621, 6.1820531669, 529.6909650946],
    [0.00000000627, 0.97936988309, 5661.3320491522],
    [0.00000000532, 4.10945195477, 4551.9534970588],
    [0.00000000612, 4.54333834592, 2218.7571041868],
    [0.00000000358, 3.40018313005, 11322.6640983044],
    [0.00000000351, 0.82547134214, 6770.7106012456],
    [0.00000000285, 3.20076318371, 1059.3819301892],
    [0.00000000321, 4.22129571277, 3442.5749449654],
    [0.00000000236, 4.37113267164, 114.43928868521],
    [0.00000000207, 3.30515852623, 213.299095438],
    [0.00000000146, 5.86551513634, 16983.9961474566],
    [0.00000000132, 4.33976193233, 1589.0728952838],
    [0.00000000094, 4.63308495483, 27197.2816936676],
    [0.00000000106, 2.22311826337, 21535.9496445154],
    [0.00000000111, 5.35986436324, 7238.6755916],
    [0.00000000075, 4.30986568058, 2333.196392872],
    [0.00000000072, 4.84272869886, 24498.8302462904],
    [0.00000000071, 3.30246972738, 12432.0426503978],
    [0.00000000054, 0.81302878785, 32858.61374281979],
    [0.00000000057, 2.05689752009, 22645.32819660879],
    [0.00000000055, 3.60805296083, 13521.7514415914],
    [0.00000000041, 5.87112493249, 43071.8992890308],
    [0.00000000041, 5.90706018616, 25028.521211385],
    [0.00000000042, 3.45878399838, 10213.285546211],
    [0.00000000034, 4.53930146941, 50586.73338786459],
    [0.0000000004, 2.42676154511, 639.897286314],
    [0.00000000034, 2.10817951154, 20426.571092422],
    [0.00000000039, 3.13572362729, 426.598190876],
    [0.00000000037, 3.48965647989, 37410.5672398786],
    [0.00000000034, 4.65866118481, 26087.9031415742],
    [0.00000000031, 0.7387032564, 7880.08915333899],
    [0.00000000031, 0.44546260957, 9103.9069941176],
    [0.00000000027, 2.04646124464, 48733.23133818299],
    [0.00000000026, 3.28799576699, 38519.945791972],
    [0.00000000023, 5.06601386537, 2118.7638603784],
    [0.00000000021, 4.43560784626, 3328.13565628019],
    [0.0000000002, 4.13436555261, 23969.1392811958],
    [0.0000000002, 0.83197497819, 58946.51688439399],
    [0.00000000018, 5.89961038519, 12566.1516999828],
    [0.00000000022, 4.53450328579, 28306.66024576099],
    [0.00000000017, 5.92708838535, 14765.2390432698],
    [0.00000000017, 2.95660103521, 6283.0758499914],
    [0.0000000002, 4.40908481184, 1223.81784077861],
    [0.00000000014, 3.283265677, 64607.84893354619],
    [0.00000000014, 0.89185489744, 30639.856638633],
    [0.00000000017, 5.74230079742, 18093.37469954999],
    [0.00000000015, 4.77056693227, 53285.1848352418],
    [0.00000000011, 4.45846749681, 54394.56338733519],
    [0.00000000012, 4.97772002754, 33326.5787331742],
    [0.00000000013, 2.79229719351, 636.9962720242],
    [0.00000000013, 1.78369712845, 27043.5028831828],
    [0.00000000008, 4.79427565109, 24978.5245894808],
    [0.00000000009, 5.71847755967, 44181.27784112419],
    [0.00000000007, 3.7689282726, 50057.04242277],
    [0.00000000007, 4.15917100843, 57837.1383323006],
    [0.00000000006, 0.54123662968, 7994.5284420242],
    [0.00000000006, 1.42248530189, 853.196381752],
    [0.00000000006, 1.96098775161, 74821.13447975718],
    [0.00000000006, 0.31283808051, 15874.6175953632],
    [0.00000000006, 5.69320857695, 70269.18098269838],
    [0.00000000008, 4.39314742052, 51116.4243529592],
    [0.00000000007, 0.69178785553, 33967.99229491319],
    [0.00000000007, 2.35491743025, 31749.2351907264],
    [0.00000000006, 0.66609872274, 25448.00585526019],
    [0.00000000006, 4.44125438426, 80482.46652890938],
    [0.00000000005, 1.39930518928, 76674.63652943878],
    [0.00000000005, 3.19093133117, 13541.42120249119],
    [0.00000000005, 1.9425240707, 23754.70674870219],
    [0.00000000005, 5.27204119187, 3340.6124266998],
    [0.00000000005, 0.62307720845, 51535.90899683439],
    [0.00000000004, 4.27558184013, 51646.11531805379],
    [0.00000000005, 0.66770098984, 60055.89543648739],
    [0.00000000004, 5.97892272902, 26617.5941066688],
    [0.00000000004, 0.80709208558, 16066.0658614748],
    [0.00000000004, 3.51112426941, 36301.18868778519],
    [0.00000000004, 5.48577502525, 73711.75592766379],
    [0.00000000004, 5.65003840556, 9384.8410080752],
];

const L3: &[Term] = &[
    [0.000000031, 0.0, 0.0],
];

const K0: &[Term] = &[
    [0.0446605976, 0.0, 0.0],
    [0.00000720897, 6.12043541204, 1059.3819301892],
    [0.00000337364, 1.81571365587, 1109.3785520934],
    [0.00000445166, 4.34028777466, 5661.3320491522],
    [0.0000024724, 3.81754716007, 4551.9534970588],
    [0.00000160627, 3.30787227488, 529.6909650946],
    [0.00000086113, 0.39810287462, 426.598190876],
    [0.00000082033, 0.56672164376, 11322.6640983044],
    [0.00000075305, 0.38073919255, 1589.0728952838],
    [0.00000083553, 3.22218361004, 25028.521211385],
    [0.00000060462, 6.13884878995, 955.5997416086],
    [0.00000077061, 0.90176346652, 13521.7514415914],
    [0.0000007163, 0.07390222419, 10213.285546211],
    [0.00000067051, 5.60662868894, 21535.9496445154],
    [0.00000064009, 1.28721945122, 26087.9031415742],
    [0.00000049492, 5.0220304095, 20426.571092422],
    [0.00000039397, 3.53674769095, 7238.6755916],
    [0.00000031105, 2.17840705749, 12566.1516999828],
    [0.00000024363, 2.56756464653, 14765.2390432698],
    [0.00000031773, 4.94765773394, 6283.0758499914],
    [0.00000023614, 1.81960130211, 27197.2816936676],
    [0.00000018401, 4.30304058074, 6770.7106012456],
    [0.00000018916, 3.05994929745, 16983.9961474566],
    [0.00000018386, 0.63122334452, 37410.5672398786],
    [0.00000018647, 0.82362711879, 31749.2351907264],
    [0.00000013589, 0.08281634729, 9103.9069941176],
    [0.0000001816, 2.81159615101, 15874.6175953632],
    [0.00000012167, 3.88202211378, 3442.5749449654],
    [0.00000013914, 5.98080634862, 51116.4243529592],
    [0.0000001396, 2.06462627686, 47623.8527860896],
    [0.00000012979, 2.50321442551, 24498.8302462904],
    [0.00000013339, 3.59094277104, 33326.5787331742],
    [0.00000010393, 5.89112893256, 639.897286314],
    [0.00000008061, 3.81396580178, 30639.856638633],
    [0.00000009061, 3.08716430121, 43071.8992890308],
    [0.00000008458, 4.23015565073, 213.299095438],
    [0.00000007352, 4.30913154375, 32858.61374281979],
    [0.00000008877, 0.51953553142, 57837.1383323006],
    [0.00000008457, 3.30527648395, 63498.47038145279],
    [0.0000000766, 3.67253001592, 39609.6545831656],
    [0.00000006378, 6.19903999708, 27043.5028831828],
    [0.00000006351, 1.74286758979, 2218.7571041868],
    [0.00000006953, 5.69837062339, 77204.32749453338],
    [0.00000004824, 5.54799575476, 22645.32819660879],
    [0.00000006029, 0.92372737411, 2118.7638603784],
    [0.000000052, 0.02999601198, 36301.18868778519],
    [0.00000004979, 2.05192024971, 53285.1848352418],
    [0.00000006122, 4.73917205263, 7.1135470008],
    [0.00000004274, 0.19617126572, 50586.73338786459],
    [0.00000004018, 1.33002190862, 24978.5245894808],
    [0.00000004668, 3.33578328775, 149.5631971346],
    [0.00000004008, 6.26870112763, 1052.2683831884],
    [0.00000004133, 4.29985665484, 52175.8062831484],
    [0.00000004577, 4.5440681141, 79373.087976816],
    [0.00000003364, 5.56559793906, 48733.23133818299],
    [0.0000000334, 0.50502056897, 12432.0426503978],
    [0.00000004077, 2.8819075146, 1066.49547719],
    [0.0000000346, 0.39670507801, 25558.2121764796],
    [0.00000002861, 5.97869304542, 18849.2275499742],
    [0.00000003929, 2.67239290951, 25661.3049506982],
    [0.0000000359, 4.37899927013, 58946.51688439399],
    [0.00000003742, 3.36410927684, 65697.55772473979],
    [0.00000003606, 2.5798026501, 41962.5207369374],
    [0.00000003452, 1.68371536257, 73711.75592766379],
    [0.00000003577, 0.04293826242, 59414.4818747484],
    [0.00000003463, 4.24832553818, 19804.8272915828],
    [0.00000002843, 2.98962334779, 76.2660712756],
    [0.00000003033, 0.03295620888, 53131.406024757],
    [0.00000002745, 3.60672397116, 83925.0414738748],
    [0.00000002237, 0.51235955611, 38519.945791972],
    [0.00000002099, 2.51934783678, 20760.4270331914],
    [0.00000002368, 2.47400090139, 103292.23063610759],
    [0.00000001966, 0.69605222332, 5327.4761083828],
    [0.00000001895, 5.13007726378, 19317.1925403286],
    [0.00000001877, 2.59036082528, 46848.3301747656],
    [0.00000002277, 5.78421606214, 95247.70557217918],
    [0.00000001528, 5.09486471744, 46514.4742339962],
    [0.00000001505, 4.3971133029, 76674.63652943878],
    [0.00000001577, 0.54958361229, 64607.84893354619],
    [0.00000001425, 2.59204451487, 40853.142184844],
    [0.00000001678, 4.81481830404, 99799.65906923798],
    [0.00000001647, 4.66644434435, 6681.2248533996],
    [0.00000001303, 1.75036641257, 28306.66024576099],
    [0.00000001401, 1.7633938233, 23969.1392811958],
    [0.00000001188, 3.91717149161, 69159.80243060499],
    [0.00000001268, 4.94831064825, 32370.9789915656],
    [0.00000001147, 1.76403734045, 54394.56338733519],
    [0.00000001519, 2.70650122189, 79219.3091663312],
    [0.0000000114, 3.85082692274, 419.4846438752],
    [0.00000001486, 4.60813201469, 19406.6782881746],
    [0.00000001214, 2.80683838794, 3340.6124266998],
    [0.00000001209, 2.10722203937, 26617.5941066688],
    [0.00000001021, 6.20701660955, 27147.28507176339],
    [0.00000001168, 0.15884807002, 91785.46086631398],
    [0.00000001363, 5.71749997734, 74821.13447975718],
    [0.00000001025, 1.00380770228, 78263.70942472259],
    [0.00000001229, 0.28112493153, 433.7117378768],
    [0.00000000931, 2.67916740088, 89586.37352302698],
    [0.00000001041, 5.96736578029, 85502.38501632259],
    [0.00000000877, 6.0463513251, 50057.04242277],
    [0.00000000941, 2.64711068353, 13655.8604911764],
    [0.00000000764, 3.75193728577, 16066.0658614748],
    [0.00000001046, 0.74503193021, 111122.32316754239],
    [0.00000000716, 1.96572460135, 632.7837393132],
    [0.00000000853, 5.54225931724, 1692.1656695024],
    [0.00000000871, 6.00637622699, 115674.27666460119],
    [0.0000000074, 0.10336690357, 35191.8101356918],
    [0.00000000967, 5.0735666329, 853.196381752],
    [0.00000000672, 5.18626290189, 40565.2543247742],
    [0.00000000725, 1.83334409057, 80482.46652890938],
    [0.00000000679, 2.99706418873, 44181.27784112419],
    [0.00000000664, 0.0333367541, 85034.42002596818],
    [0.00000000678, 0.40554965451, 110012.94461544899],
    [0.00000000765, 2.98894625936, 18093.37469954999],
    [0.00000000632, 5.71674093654, 1581.959348283],
    [0.00000000635, 2.57160221668, 102762.53967101299],
    [0.00000000638, 5.11462657748, 14477.3511832],
    [0.0000000073, 4.12617808217, 45892.73043315699],
    [0.00000000691, 2.83711562299, 72936.23331633979],
    [0.00000000648, 3.96525299966, 2333.196392872],
    [0.00000000597, 3.0216312744, 70269.18098269838],
    [0.00000000621, 5.52441567617, 129380.13377768178],
    [0.00000000551, 2.31969059, 38654.05484155699],
    [0.00000000552, 1.68516468746, 100909.03762133139],
    [0.00000000656, 3.48559811223, 25448.00585526019],
    [0.00000000598, 5.27899161334, 66653.15746634839],
    [0.00000000508, 5.82536956862, 103.0927742186],
    [0.00000000516, 1.62245354432, 125887.56221081219],
    [0.00000000533, 3.55197989955, 74.7815985673],
    [0.0000000066, 5.44784018738, 51749.20809227239],
    [0.00000000601, 4.22566161756, 7880.08915333899],
    [0.00000000639, 3.40142750567, 1596.1864422846],
    [0.00000000512, 5.7328686723, 224.3447957019],
    [0.00000000474, 5.77679730313, 536.8045120954],
    [0.00000000554, 0.16444397669, 7994.5284420242],
    [0.00000000593, 5.37153400323, 99024.13645791399],
    [0.00000000508, 2.79798299511, 111590.2881578968],
    [0.00000000446, 4.25015283223, 956.2891559706],
    [0.00000000473, 0.88060307134, 90695.75207512038],
    [0.00000000399, 5.36224802842, 10021.8372800994],
    [0.00000000393, 3.94000868421, 76144.94556434419],
    [0.00000000476, 0.18468961397, 25021.4076643842],
    [0.00000000393, 4.07879317519, 110.2063212194],
    [0.00000000466, 3.08888317864, 25035.6347583858],
    [0.00000000446, 4.57109514321, 1162.4747044078],
    [0.00000000378, 4.24624580823, 60055.89543648739],
    [0.00000000372, 3.06662890607, 116783.65521669458],
    [0.00000000382, 3.84896074857, 51646.11531805379],
    [0.00000000333, 3.67654447014, 1478.8665740644],
    [0.00000000339, 3.37103535814, 25132.3033999656],
    [0.00000000438, 1.99689387898, 126996.94076290558],
    [0.00000000431, 1.46253556357, 2648.454825473],
    [0.00000000337, 2.83227030647, 141762.17980617538],
    [0.00000000365, 4.2345126164, 33967.99229491319],
    [0.00000000307, 4.28765793425, 86143.79857806159],
    [0.00000000391, 0.88618930371, 131548.89425996438],
    [0.00000000308, 2.82460121121, 121335.60871375339],
    [0.00000000299, 3.24563272212, 117873.36400788819],
    [0.00000000289, 3.94968577454, 56727.7597802072],
    [0.00000000319, 3.14496597351, 96357.08412427259],
    [0.00000000342, 3.90136738969, 29530.4780865396],
    [0.00000000327, 2.67315595585, 1375.7737998458],
    [0.0000000027, 4.0151269212, 104351.61256629678],
    [0.00000000313, 5.48766356911, 68050.42387851159],
    [0.00000000289, 2.88571192421, 12725.453434775],
    [0.0000000028, 0.60092398659, 467.9649903544],
    [0.00000000249, 1.57531288812, 60370.08161635699],
    [0.00000000334, 5.14242505654, 77837.11123384659],
    [0.00000000262, 1.38706424666, 51066.427731055],
    [0.00000000262, 3.90181265972, 137210.22630911658],
    [0.0000000025, 5.87376099107, 128850.44281258718],
    [0.00000000212, 5.49905349303, 75930.51303185058],
    [0.00000000217, 4.37700620575, 132658.27281205778],
    [0.00000000229, 2.45751642059, 105460.99111839019],
    [0.00000000196, 1.49878662877, 34282.1784747828],
    [0.00000000197, 2.70006730669, 77734.01845962799],
    [0.00000000216, 2.16864720639, 105307.21230790539],
    [0.00000000197, 4.03515223373, 157636.79740153858],
    [0.00000000217, 1.4199280905, 8194.2753332086],
    [0.00000000207, 5.48072297943, 49842.60989027639],
    [0.00000000247, 4.45514690999, 316.3918696566],
    [0.00000000212, 0.98557204226, 45494.58142974879],
    [0.00000000164, 1.78269366174, 102232.84870591838],
    [0.00000000163, 2.00336796015, 323.5054166574],
    [0.00000000162, 3.48415144664, 136100.84775702318],
    [0.00000000219, 5.7720844366, 647.0108333148],
    [0.00000000161, 0.45586146015, 27676.976036858],
    [0.0000000019, 1.70454591498, 86457.98475793119],
    [0.00000000155, 2.61026587375, 106570.36967048359],
    [0.00000000212, 6.21408553585, 51535.90899683439],
    [0.00000000175, 5.07673386187, 153084.84390447979],
    [0.00000000217, 1.75713830828, 118828.96374949679],
    [0.00000000154, 1.65846543486, 3328.13565628019],
    [0.00000000189, 5.42124755439, 131395.11544947958],
    [0.00000000154, 2.29104952062, 155468.036919256],
    [0.00000000161, 5.88790182407, 137678.191299471],
    [0.00000000153, 5.56607876748, 102018.41617342478],
    [0.00000000156, 0.34581613775, 742.9900605326],
    [0.00000000194, 5.47207522719, 23754.70674870219],
    [0.00000000146, 5.85216278563, 92741.06060792258],
    [0.00000000169, 4.00294155758, 1911.1994832172],
    [0.00000000141, 4.70334779678, 151975.46535238638],
    [0.00000000155, 0.77881822057, 71980.63357473118],
    [0.0000000015, 2.4376215945, 42153.969003049],
    [0.00000000154, 4.39807235388, 11610.5519583742],
    [0.00000000155, 1.41745668755, 23869.1460373874],
    [0.00000000161, 3.26668070855, 142871.55835826878],
    [0.00000000129, 1.01230383495, 23439.44831610119],
    [0.00000000162, 3.78158256134, 24395.7374720718],
    [0.00000000119, 1.82517731321, 38813.3565763492],
    [0.00000000117, 0.47369224927, 91805.13062721379],
    [0.00000000122, 5.43029169684, 49527.35145767539],
    [0.00000000138, 6.10806193439, 2221.856634597],
    [0.00000000142, 5.16989086803, 45405.0956819028],
    [0.00000000147, 1.97347820267, 147423.51185532758],
    [0.00000000117, 0.42486492254, 13541.42120249119],
    [0.00000000122, 0.44527167882, 65717.22748563958],
    [0.00000000106, 5.91914391344, 167850.0829477496],
    [0.00000000132, 4.50846664402, 112231.70171963578],
    [0.00000000133, 3.80862044303, 522.5774180938],
    [0.00000000107, 0.90145594263, 22747.2907148744],
    [0.00000000114, 5.6636756483, 148532.89040742096],
    [0.00000000101, 1.86453102348, 220.4126424388],
    [0.00000000098, 1.19927515053, 846.0828347512],
    [0.00000000105, 5.22622973703, 173511.41499690176],
    [0.00000000113, 1.9346545171, 103925.01437542078],
    [0.000000001, 5.96542406338, 2111.6503133776],
    [0.00000000094, 4.25461405727, 80174.90890793978],
    [0.00000000093, 3.55897968108, 24505.94379329119],
    [0.00000000101, 2.01028392496, 9384.8410080752],
    [0.00000000116, 4.51949593705, 19.66976089979],
    [0.000000001, 4.80786579464, 2008.557539159],
    [0.00000000101, 6.28182244845, 168959.46149984296],
    [0.00000000099, 0.69147094616, 62389.09182935939],
    [0.00000000097, 1.86819782488, 38.1330356378],
    [0.00000000102, 0.57135185859, 949.1756089698],
    [0.0000000011, 5.76742703025, 24491.71669928959],
    [0.00000000105, 0.43459291883, 39629.32434406539],
    [0.00000000109, 4.79297837478, 2199.087343287],
    [0.00000000079, 4.16737827466, 54087.0057663656],
    [0.00000000084, 5.91237251368, 68241.8721446232],
    [0.00000000074, 0.79640715125, 130439.51570787099],
    [0.00000000078, 3.45313703898, 75615.25459924959],
    [0.00000000073, 0.04222003033, 143961.2671494624],
    [0.00000000085, 0.18756064683, 1.4844727083],
    [0.00000000072, 0.84907589806, 183724.7005431128],
    [0.00000000073, 0.58048649541, 117893.03376878797],
    [0.00000000098, 0.82298568073, 71582.48457132299],
    [0.00000000075, 2.24078447228, 157483.01859105378],
    [0.0000000007, 3.09487716434, 206.1855484372],
    [0.00000000069, 1.21874179875, 1272.6810256272],
    [0.00000000072, 5.21743636551, 18207.81398823521],
    [0.00000000093, 3.37994700867, 153.7788104848],
    [0.00000000072, 6.14328661261, 44937.1306915484],
    [0.00000000078, 5.85256430811, 51123.53789995999],
    [0.00000000075, 4.32549465418, 25234.70675982219],
    [0.00000000065, 5.20996377907, 1485.9801210652],
    [0.00000000073, 1.69534911488, 81591.84508100279],
    [0.00000000063, 1.7384406884, 107679.74822257696],
    [0.00000000063, 0.21999375784, 1795.258443721],
    [0.00000000068, 4.91254061988, 1265.5674786264],
    [0.00000000075, 6.07656606498, 13362.4497067992],
    [0.00000000081, 2.8950849986, 51109.31080595839],
    [0.00000000076, 2.7219672738, 154938.34595416137],
    [0.00000000066, 2.26130984063, 151.0476698429],
    [0.00000000069, 4.90384849843, 52705.49724824299],
    [0.00000000069, 2.04572124373, 94138.32702008578],
    [0.00000000067, 2.67975680343, 39743.7636327506],
    [0.00000000068, 1.26816187335, 148.0787244263],
    [0.00000000074, 4.43227710866, 138633.7910410796],
    [0.00000000075, 4.6805562926, 122444.98726584678],
    [0.00000000055, 0.15505965005, 138319.60486120995],
    [0.00000000058, 5.83488915129, 128320.75184749259],
    [0.00000000073, 6.0191961791, 25938.3399444396],
    [0.00000000054, 5.65825060664, 24609.0365675098],
    [0.00000000054, 0.4205187913, 26514.5013324502],
    [0.00000000068, 3.9421691674, 2125.8774073792],
    [0.0000000005, 2.18833591043, 29428.515568274],
    [0.00000000063, 1.74168560351, 151199.94274106238],
    [0.00000000056, 4.5973361787, 24925.4284371664],
    [0.0000000005, 1.27717288474, 114.3991069134],
    [0.00000000058, 5.83233280606, 103821.92160120218],
    [0.00000000052, 1.67147631926, 29416.03879785439],
    [0.00000000053, 1.04034472989, 35472.7441496494],
    [0.00000000055, 0.66162286115, 164407.50800278416],
    [0.00000000063, 1.68050616362, 55503.94193942859],
    [0.00000000056, 2.7956017126, 25654.19140369739],
    [0.00000000053, 1.21822057207, 184834.07909520617],
    [0.00000000056, 2.80053739054, 66941.04532641819],
    [0.00000000058, 0.44690903031, 26301.2022370122],
    [0.00000000045, 2.68594059476, 163766.0944410452],
    [0.00000000058, 4.44540075268, 106262.81204951399],
    [0.00000000045, 2.05805178575, 199599.31813847594],
    [0.00000000056, 4.953890111, 25874.6040461362],
    [0.0000000005, 0.11170220845, 189386.03259226496],
    [0.00000000051, 5.58830454318, 25668.418497699],
    [0.00000000052, 4.09054634522, 27999.1026247914],
    [0.00000000042, 2.76309339824, 163298.1294506908],
    [0.00000000054, 3.14541812275, 1905.4647649404],
    [0.00000000045, 0.42044417169, 50593.84693486539],
    [0.00000000046, 0.8616674265, 3462.2447058652],
    [0.00000000051, 5.97983897198, 128106.31931499895],
    [0.00000000044, 4.05335566222, 1223.81784077861],
    [0.00000000043, 1.85907462895, 299.1263942692],
    [0.00000000047, 4.59418984909, 158746.17595363196],
    [0.00000000039, 0.91242005793, 25455.119402261],
    [0.0000000004, 0.10355520765, 1045.1548361876],
    [0.00000000039, 0.27187430124, 162188.75089859738],
    [0.00000000038, 1.25910402513, 101703.15774082378],
    [0.00000000049, 1.50717572511, 3.9321532631],
    [0.00000000043, 2.94866865674, 97466.46267636596],
    [0.00000000038, 1.62050347838, 154194.22245657316],
    [0.00000000038, 5.34096385209, 181555.94006083018],
    [0.00000000053, 6.05613351107, 1731.1223529326],
    [0.00000000047, 5.05817710034, 25131.61398560359],
    [0.00000000037, 1.49411162897, 178063.3684939606],
    [0.00000000037, 1.12652540302, 6044.2285813754],
    [0.00000000036, 2.73469902403, 12546.481939083],
    [0.00000000049, 0.37227779287, 24712.1293417284],
    [0.00000000049, 0.19555792422, 61279.713277266],
    [0.00000000049, 4.77196412156, 14.2270940016],
    [0.00000000035, 0.66012175974, 99979.7361995226],
    [0.00000000034, 1.99306377064, 735.8765135318],
    [0.00000000033, 3.01294790836, 123554.36581794015],
    [0.00000000033, 4.82618827572, 1089.7087911936],
    [0.00000000033, 0.55560802627, 73891.83305794839],
    [0.00000000042, 0.80995885901, 31415.379249957],
    [0.00000000035, 6.15590758691, 1063.3140834523],
    [0.00000000033, 1.90979759068, 133767.65136415116],
    [0.00000000033, 6.13717077901, 64901.25971792339],
    [0.00000000031, 2.71374441742, 193937.9860893238],
    [0.00000000033, 3.45437499722, 50579.61984086379],
    [0.00000000031, 3.17231209856, 53235.18821333759],
    [0.00000000035, 5.55956366292, 77211.44104153418],
    [0.00000000031, 4.87278043875, 177287.84588263658],
    [0.00000000036, 2.71300321251, 77197.21394753258],
    [0.00000000038, 3.05180090731, 112545.88789950538],
    [0.00000000037, 0.72015097912, 51322.60990139639],
    [0.00000000039, 2.92734219692, 71378.55953479178],
    [0.0000000003, 0.19319332419, 34082.4315835984],
    [0.0000000003, 4.99290140718, 130012.91751699499],
    [0.00000000028, 5.58199050385, 3.881335358],
    [0.00000000031, 2.91726882117, 45290.65639321759],
    [0.00000000035, 3.03906038404, 23866.04650697719],
    [0.00000000028, 2.90694889896, 19202.75325164339],
    [0.00000000033, 3.7930486592, 97670.38771289718],
    [0.0000000003, 3.81888032497, 125112.03959948818],
    [0.00000000026, 3.26062945279, 215473.93573383917],
    [0.00000000035, 2.94335476614, 1055.4497769261],
    [0.0000000003, 2.58050315977, 103711.71527998279],
    [0.00000000032, 5.93082738534, 77623.81213840858],
    [0.00000000025, 5.15881842761, 144916.86689107097],
    [0.00000000024, 5.3262810103, 183570.921732628],
    [0.00000000033, 3.11269470303, 6129.2970395066],
    [0.00000000028, 3.96264012736, 55618.3812281138],
    [0.00000000027, 5.05748202193, 77.7505439839],
    [0.00000000023, 3.93184041218, 209812.60368468694],
    [0.00000000023, 2.97828913807, 170068.84005193636],
    [0.00000000023, 3.02410467442, 154408.65498906677],
    [0.00000000023, 2.64107687051, 1169.5882514086],
    [0.00000000023, 0.25230669849, 6885.14988993081],
    [0.00000000022, 0.30839802551, 72602.37737557039],
    [0.00000000024, 4.20634254707, 113341.08027172917],
    [0.00000000025, 6.03517574882, 61560.64729122359],
    [0.00000000025, 2.44796828928, 200708.69669056937],
    [0.00000000023, 4.42963967563, 24079.34560241519],
    [0.00000000029, 1.99323662078, 3178.1457905676],
    [0.00000000026, 1.2977874774, 1639.069517188],
    [0.0000000002, 4.4642884674, 25551.09862947879],
    [0.00000000026, 0.39072760791, 50483.640613646],
    [0.0000000002, 3.37196564823, 195047.36464141717],
    [0.00000000026, 3.19823956651, 98068.53671630539],
    [0.0000000002, 3.94065479517, 156527.41884944518],
    [0.00000000024, 1.95030533851, 180282.12559814737],
    [0.00000000023, 3.98174774419, 90989.16285949759],
    [0.00000000021, 5.8113132808, 181026.24909573558],
    [0.00000000019, 4.14038068757, 8989.46770543239],
    [0.00000000019, 1.38900948788, 143980.93691036216],
    [0.00000000019, 0.13502976189, 132350.71519108818],
    [0.00000000024, 4.99834521846, 860.3099287528],
    [0.0000000002, 3.23645520881, 23976.2528281966],
    [0.00000000022, 0.47640478412, 47803.9299163742],
    [0.00000000024, 0.8346527935, 158438.6183326624],
    [0.00000000023, 4.49278636405, 11.0457002639],
    [0.00000000021, 1.23047300103, 205260.65018762814],
    [0.00000000018, 3.11689718107, 170049.1702910366],
    [0.00000000018, 5.46737894322, 333.8559407694],
    [0.0000000002, 4.16299266541, 61165.27398858079],
    [0.00000000024, 4.17572870564, 87253.17713015496],
    [0.00000000018, 5.17168232868, 48835.19385644859],
    [0.00000000018, 2.51749395053, 641.41356173899],
    [0.00000000019, 0.21389330059, 32132.1317229496],
    [0.00000000017, 4.3017189532, 139428.98341330336],
    [0.00000000017, 3.80647700263, 636.9962720242],
    [0.00000000017, 4.14339250002, 114.43928868521],
    [0.00000000016, 4.56179222167, 94329.77528619739],
    [0.00000000023, 0.07856390681, 26011.6370702986],
    [0.00000000017, 1.00241943726, 28206.6670019526],
    [0.00000000016, 5.14780502162, 225687.22128005017],
    [0.00000000019, 2.728545793, 179172.74704605396],
    [0.00000000016, 4.43025176992, 210921.98223678037],
    [0.00000000021, 5.88376607371, 58458.88213313979],
    [0.00000000017, 1.32237687142, 164721.69418265377],
    [0.00000000016, 5.33308612753, 127791.06088239799],
    [0.00000000021, 2.23090328679, 1699.2792165032],
    [0.00000000021, 1.28806813511, 9745.3205558566],
    [0.00000000015, 4.15367763867, 35077.37084700659],
    [0.00000000017, 1.82297330747, 17893.6278083656],
    [0.0000000002, 2.82651635217, 1073.6090241908],
    [0.00000000017, 4.36728047846, 4022.2625319642],
    [0.00000000014, 4.45275907896, 231348.55332920235],
    [0.00000000014, 3.23108110798, 93696.66034953119],
    [0.00000000016, 0.59241059683, 2168.7604822826],
    [0.00000000015, 5.68508442676, 1685.0521225016],
    [0.00000000015, 5.51173650331, 1485.2907067032],
    [0.00000000014, 5.31081506194, 1574.8458012822],
    [0.00000000018, 0.23472837965, 2703.6161546756],
    [0.00000000014, 5.07330956066, 5193.3670587978],
    [0.00000000013, 3.99153623296, 28421.0995344462],
    [0.00000000014, 4.75844661556, 48997.6604925808],
    [0.00000000018, 4.29893504984, 171004.7700326452],
    [0.00000000013, 1.46510667358, 49957.0491789616],
    [0.00000000016, 0.13723809226, 440.8252848776],
    [0.00000000017, 0.96056039358, 126067.63934109679],
    [0.00000000013, 2.84328794567, 4371.8763667742],
    [0.00000000013, 0.54688598897, 16703.062133499],
    [0.00000000014, 3.29575519284, 149642.26895951436],
    [0.00000000014, 5.4698574105, 129215.69786709236],
    [0.00000000013, 4.29486247677, 185943.45764729957],
    [0.00000000013, 5.40128485716, 58220.0348645238],
    [0.00000000013, 2.87639861182, 24292.64469785319],
    [0.00000000013, 3.58573856654, 430.5303441391],
    [0.00000000015, 4.15339190402, 49.9966219042],
    [0.00000000013, 3.36175757522, 119784.56349110538],
    [0.00000000016, 0.38270196266, 2751.5475996916],
    [0.00000000016, 4.79667096828, 120226.23016165999],
    [0.00000000012, 5.76199325872, 189853.99758261937],
    [0.00000000012, 5.8317029748, 2324.9494088156],
    [0.00000000012, 1.68233481539, 203375.74902421076],
    [0.00000000016, 5.70971646933, 2538.2485042536],
    [0.00000000011, 1.21532083318, 917.9302859818],
    [0.00000000012, 1.37175018255, 76667.52298243798],
    [0.00000000014, 4.11984240822, 32769.1279949738],
    [0.00000000012, 2.8665036642, 75085.56363415498],
    [0.00000000012, 1.21435472131, 197092.67317421938],
    [0.00000000012, 0.78618604907, 49953.94964855139],
    [0.00000000013, 5.40924019722, 77039.89158394396],
    [0.00000000012, 5.74322268485, 103285.11708910679],
    [0.00000000014, 5.03334115664, 23962.02573419499],
    [0.00000000015, 4.77882589468, 4083.9885067044],
    [0.00000000013, 0.39493238519, 21716.0267748],
    [0.00000000015, 5.42631055862, 103127.79472551816],
    [0.00000000011, 5.0317428846, 64741.95798313119],
    [0.00000000012, 3.60028100448, 25440.89230825939],
    [0.00000000012, 2.3920664078, 1802.3719907218],
    [0.00000000011, 0.25555610693, 22909.7573510066],
    [0.00000000013, 2.81281578323, 25344.9130810416],
    [0.00000000014, 4.7883035595, 579.6875869988],
    [0.00000000015, 4.87159037678, 2014.9816717978],
    [0.00000000014, 2.62133904645, 129909.82474277639],
    [0.0000000001, 0.07768712036, 241561.83887541335],
    [0.00000000011, 5.43986531185, 1135.6768718932],
    [0.00000000011, 1.03127191533, 6751.0408403458],
    [0.00000000012, 2.22638798087, 3308.4658953804],
    [0.00000000011, 4.25594630061, 24601.92302050899],
    [0.0000000001, 5.58632516591, 226796.59983214355],
    [0.00000000014, 0.73221802474, 26720.68688088739],
    [0.00000000011, 2.24284482746, 415.5524906121],
    [0.00000000013, 6.20615004294, 76571.54375522019],
    [0.00000000011, 4.66725087653, 225.8292684102],
    [0.00000000011, 1.32182591269, 51962.5071877104],
    [0.00000000011, 0.53568176119, 222.8603229936],
    [0.00000000011, 3.5234105041, 12412.372889498],
    [0.00000000012, 4.56507857574, 1884.9011634174],
    [0.0000000001, 5.60788779902, 129799.61842155698],
    [0.00000000013, 0.35136367501, 422.6660376129],
    [0.00000000011, 5.27287627412, 3492.5715668696],
    [0.00000000009, 3.08613240661, 152155.54248267098],
    [0.00000000013, 5.89824089699, 13675.5302520762],
    [0.00000000011, 1.66381123346, 77154.33087262919],
    [0.00000000012, 2.51602937331, 52026.2430860138],
    [0.0000000001, 3.68892863433, 216583.31428593257],
    [0.00000000009, 5.39953024032, 50951.98844236979],
    [0.00000000009, 2.10445798962, 50696.93970908399],
    [0.00000000012, 2.34637876967, 103299.34418310839],
    [0.0000000001, 4.56389732815, 204151.27163553477],
    [0.0000000001, 1.15060987287, 2974.609954611],
    [0.00000000009, 2.10784420012, 207643.8432024044],
    [0.00000000009, 1.81681273829, 24815.222115947],
    [0.00000000009, 5.94918500812, 26727.8004278882],
    [0.0000000001, 3.28302614869, 159855.55450572536],
    [0.00000000009, 5.88792720628, 95.9792272178],
    [0.00000000009, 2.97875204356, 191.4482661116],
    [0.00000000009, 5.16733129624, 628.8515860501],
    [0.00000000012, 3.6583568029, 25863.55834587229],
    [0.00000000009, 3.33930846208, 188276.6540401716],
    [0.00000000009, 5.29939039545, 71492.99882347698],
    [0.00000000012, 6.11722096918, 2641.3412784722],
    [0.00000000009, 0.46803560033, 50064.15596977079],
    [0.0000000001, 3.14585008937, 67608.75720795698],
    [0.00000000011, 3.75603396296, 87648.55043279778],
    [0.00000000011, 1.3332275118, 1083.0802322936],
    [0.00000000009, 2.15838847784, 26.2983197998],
    [0.00000000008, 5.61234074474, 155303.60100866656],
    [0.00000000011, 1.6942538765, 437.6438911399],
    [0.00000000011, 6.07084481246, 24182.4383766338],
    [0.00000000009, 5.78639659232, 220025.88923089797],
    [0.00000000009, 0.52075469654, 123758.29085447139],
    [0.00000000008, 4.41746184199, 2686.7220945412],
    [0.00000000011, 1.11252575142, 1577.3435424478],
    [0.00000000011, 1.31129105409, 78050.41032928458],
    [0.00000000008, 3.35484814997, 9123.5767550174],
    [0.00000000008, 3.49553231478, 1243.4876016784],
    [0.00000000009, 3.02811457358, 50049.92887576919],
    [0.00000000008, 3.91390202267, 184526.5214742366],
    [0.00000000007, 0.77351004136, 101173.46677572919],
    [0.00000000008, 0.6901479326, 487.6347512542],
    [0.00000000007, 1.76425867488, 156100.82065856917],
    [0.00000000009, 2.02925445557, 621.7438008392],
    [0.0000000001, 3.58089903271, 51220.20654153979],
    [0.00000000009, 3.74336236348, 703.6331846174],
    [0.00000000009, 1.6461291603, 120417.67842777158],
    [0.00000000008, 1.80519514306, 16342.5825857176],
    [0.00000000008, 5.47046035192, 2015.6710861598],
    [0.00000000008, 0.37334585042, 92914.50917930716],
    [0.00000000007, 5.3888016115, 24864.08530079559],
    [0.00000000007, 2.12168253656, 209658.82487420217],
    [0.00000000007, 0.12701999002, 1368.660252845],
    [0.00000000007, 0.45814136345, 145090.31546245556],
    [0.00000000007, 1.35246059297, 25241.820306823],
    [0.00000000008, 2.17862372042, 51756.3216392732],
    [0.00000000007, 3.64678022937, 1263.15736257819],
    [0.00000000009, 3.26760965097, 196156.74319351057],
    [0.00000000007, 0.14115349037, 174620.79354899516],
    [0.00000000008, 5.4147377603, 73.297125859],
    [0.00000000009, 0.98878842171, 51013.33157874059],
    [0.00000000007, 5.62634240992, 247223.17092456558],
    [0.00000000007, 4.53938646592, 1382.8873468466],
    [0.00000000009, 0.39663850066, 119002.41232088137],
    [0.00000000007, 4.33107135312, 24822.3356629478],
    [0.00000000007, 3.84962278159, 1471.7530270636],
    [0.00000000008, 5.57545930407, 51742.09454527159],
    [0.00000000008, 6.24115747083, 180496.558130641],
    [0.00000000008, 3.83221005514, 15406.65260500879],
    [0.00000000007, 1.7158265202, 25565.3257234804],
    [0.00000000008, 3.744646801, 963.4027029714],
    [0.00000000007, 0.72458655957, 235900.50682626115],
    [0.00000000009, 0.33936585269, 2352.8661537718],
    [0.00000000006, 1.28667443095, 257436.45647077652],
    [0.00000000007, 5.59612210323, 10681.2505365654],
    [0.00000000007, 5.89037270587, 2820.8311441262],
    [0.00000000008, 0.1428257198, 26610.48055966799],
    [0.00000000006, 3.10878300619, 5019.9184874132],
    [0.00000000007, 3.35211931217, 190495.41114435834],
    [0.00000000007, 5.59663316646, 201818.07524266277],
    [0.00000000006, 5.01676550142, 82815.66292178139],
    [0.00000000006, 5.25753866203, 44295.7171298094],
    [0.00000000007, 5.02052998087, 543.9180590962],
    [0.00000000008, 3.12508682237, 50800.03248330259],
    [0.00000000006, 0.49475135036, 242671.21742750678],
    [0.00000000006, 0.36194427801, 66826.60603773296],
    [0.00000000006, 2.83364150877, 25138.7275326044],
    [0.00000000007, 4.79107371214, 206370.02873972157],
    [0.00000000006, 5.69630220829, 124156.43985787958],
    [0.00000000006, 5.64964054045, 28791.5192962498],
    [0.00000000006, 3.85780660974, 5635.0337293524],
    [0.00000000006, 1.50768771762, 22759.76748529401],
    [0.00000000006, 1.68124734321, 5687.630368952],
    [0.00000000006, 5.91191896298, 113501.48764111398],
    [0.00000000007, 3.538961808, 178243.44562424519],
    [0.00000000008, 2.20752238453, 221135.26778299137],
    [0.00000000007, 3.17555947326, 51543.0225438352],
    [0.00000000007, 1.12413230584, 78793.40038981718],
    [0.00000000006, 2.60127867621, 207114.15223730978],
    [0.00000000006, 2.76434926285, 65831.6667743248],
    [0.00000000008, 1.72802616379, 51219.51712717779],
    [0.00000000006, 2.95969796567, 102769.65321801379],
    [0.00000000006, 2.11395628653, 19336.86230122839],
    [0.00000000005, 0.05146553914, 27140.17152476259],
    [0.00000000006, 5.00281279545, 175730.17210108857],
    [0.00000000005, 4.31947102456, 223180.57631579356],
    [0.00000000007, 2.87309236254, 7768.3665566946],
    [0.00000000005, 3.56779283368, 53764.8791784322],
    [0.00000000007, 6.19294186126, 5815.11085963699],
    [0.00000000007, 3.49493102856, 117.3198682202],
    [0.00000000006, 1.22413590432, 1898.3512179396],
    [0.00000000007, 3.57507476445, 134.109049585],
    [0.00000000006, 0.70906008358, 182615.3219910194],
    [0.00000000006, 2.29860471851, 23336.3555418826],
    [0.00000000005, 2.93781247183, 27154.3986187642],
    [0.00000000005, 0.41617574467, 1593.0050485469],
    [0.00000000005, 0.19341480123, 4525.655177259],
    [0.00000000005, 1.94449721087, 251775.12442162435],
    [0.00000000006, 3.559889404, 1279.794572628],
    [0.00000000005, 0.05780692957, 202.2533951741],
    [0.00000000005, 4.63902707905, 54879.422437824],
    [0.00000000006, 1.98568654772, 4398.17468657401],
    [0.00000000005, 4.53089732971, 37698.4550999484],
    [0.00000000006, 5.48372057781, 2854.6403739102],
    [0.00000000005, 5.83028298826, 102755.42612401219],
    [0.00000000005, 5.14873984228, 26507.38778544939],
    [0.00000000006, 3.78604275984, 84307.93800609799],
    [0.00000000006, 2.20481980968, 78114.14622758799],
    [0.00000000005, 0.53003137863, 330.6189636582],
    [0.00000000005, 5.1156899366, 36109.7404216736],
    [0.00000000005, 1.83325094456, 76784.84285065818],
    [0.00000000005, 1.62215033086, 108789.12677467037],
    [0.00000000004, 2.07767357013, 50689.82616208319],
    [0.00000000005, 3.06624476936, 41520.8540663828],
    [0.00000000006, 4.47671859569, 2655.5683724738],
    [0.00000000005, 1.4477237686, 8044.5250639284],
    [0.00000000005, 3.26322811023, 1603.2999892854],
    [0.00000000005, 3.00840238838, 1353.7487450168],
    [0.00000000006, 2.91044718728, 153878.9640239722],
    [0.00000000005, 5.29755876326, 2544.6726368924],
    [0.00000000005, 4.30003780422, 4578.2518168586],
    [0.00000000005, 2.28536880179, 7392.4544020848],
    [0.00000000006, 4.78846770255, 165516.88655487756],
    [0.00000000005, 3.87196959931, 145872.4666326796],
    [0.00000000004, 1.09866879802, 25764.39772491679],
    [0.00000000004, 4.98156556231, 76041.85279012559],
    [0.00000000004, 0.35240469501, 40738.70289615879],
    [0.00000000004, 3.35393308104, 309.2783226558],
    [0.00000000004, 5.47941053308, 1155.361157407],
    [0.00000000006, 1.95551793713, 113736.45357437199],
    [0.00000000004, 6.08216930396, 139589.3907826882],
    [0.00000000004, 5.88617883804, 171960.36977425378],
    [0.00000000005, 3.48680337821, 1585.1407420207],
    [0.00000000005, 1.65399340329, 134877.02991624456],
    [0.00000000004, 0.21351010899, 191604.78969645177],
    [0.00000000005, 3.29902657853, 838.9692877504],
    [0.00000000004, 6.18766015735, 196137.07343261078],
    [0.00000000005, 3.12395683382, 102659.44689679438],
    [0.00000000004, 3.82567961503, 216897.50046580215],
    [0.00000000004, 1.60778975609, 82701.22363309616],
    [0.00000000004, 1.91255389753, 4268.0941781936],
    [0.00000000005, 0.82825177151, 77101.23472031478],
    [0.00000000004, 5.8168800009, 87413.5844995398],
    [0.00000000005, 6.08975366285, 222244.64633508475],
    [0.00000000004, 0.13211601578, 525.7588118315],
    [0.00000000005, 1.20952306399, 3776.4308857348],
    [0.00000000005, 6.07700376351, 2045.3085328022],
    [0.00000000004, 0.91729749427, 76137.83201734339],
    [0.00000000004, 4.76427584875, 229463.65216578494],
    [0.00000000005, 3.75931239748, 74923.09699802278],
    [0.00000000004, 0.67518246346, 171178.21860402977],
    [0.00000000004, 1.74076254209, 160964.93305781877],
    [0.00000000004, 2.94667078816, 7830.0925314348],
    [0.00000000004, 1.08454547419, 959.1228599576],
    [0.00000000005, 5.76327112357, 9591.5417453718],
    [0.00000000004, 2.48967215834, 273311.0740661397],
    [0.00000000004, 0.9671290912, 2214.7430875962],
    [0.00000000004, 4.84209841482, 127261.36991730338],
    [0.00000000004, 0.34471088879, 25014.29411738339],
    [0.00000000005, 4.49761567566, 10059.5067357262],
    [0.00000000004, 0.33893242778, 14650.79975458459],
    [0.00000000004, 5.0441300184, 307.5576209696],
    [0.00000000004, 3.23869565179, 5039.588248313],
    [0.00000000005, 3.31843202423, 23549.6546373206],
];

const K1: &[Term] = &[
    [0.00552114624, PI, 0.0],
    [0.00000021558, 3.34591864678, 1109.3785520934],
    [0.00000020129, 4.54206853137, 1059.3819301892],
    [0.00000007838, 2.3130430518, 4551.9534970588],
    [0.00000006094, 5.52123098532, 1589.0728952838],
    [0.00000002859, 1.18416978349, 955.5997416086],
    [0.00000002489, 1.71571018762, 529.6909650946],
    [0.00000002467, 2.0993734975, 11322.6640983044],
    [0.00000002392, 5.17970787758, 426.598190876],
    [0.00000001774, 5.842079968, 6770.7106012456],
    [0.00000001586, 1.03727481583, 14765.2390432698],
    [0.00000001589, 2.33579752599, 3442.5749449654],
    [0.00000001534, 3.88653743887, 639.897286314],
    [0.00000001328, 4.82472600399, 9103.9069941176],
    [0.00000001466, 3.51624875729, 20426.571092422],
    [0.00000001497, 3.05098027433, 7.1135470008],
    [0.00000001178, 4.59878315042, 16983.9961474566],
    [0.00000001084, 1.67730136903, 1052.2683831884],
    [0.00000001019, 4.81585746581, 7238.6755916],
    [0.00000001301, 1.19813108934, 1066.49547719],
    [0.00000001039, 3.29173969685, 2218.7571041868],
    [0.00000000831, 6.15644089122, 2118.7638603784],
    [0.00000000745, 3.53119266779, 24498.8302462904],
    [0.00000000844, 0.63252270944, 12566.1516999828],
    [0.00000000741, 5.63405340847, 213.299095438],
    [0.00000000651, 3.41384302393, 27197.2816936676],
    [0.00000000536, 2.2660643396, 30639.856638633],
    [0.00000000457, 0.80694269379, 22645.32819660879],
    [0.00000000442, 5.866975393, 32858.61374281979],
    [0.00000000431, 2.04852803262, 12432.0426503978],
    [0.00000000398, 6.0621135207, 24978.5245894808],
    [0.00000000365, 5.50821358402, 10213.285546211],
    [0.00000000369, 3.49400519956, 21535.9496445154],
    [0.00000000307, 5.43723301495, 419.4846438752],
    [0.00000000387, 4.88958029432, 433.7117378768],
    [0.00000000284, 4.66271710995, 37410.5672398786],
    [0.00000000363, 2.79611300377, 5661.3320491522],
    [0.00000000262, 3.02719861651, 853.196381752],
    [0.0000000025, 3.57645871441, 19317.1925403286],
    [0.00000000208, 2.0627097918, 38519.945791972],
    [0.00000000194, 1.66269468059, 31749.2351907264],
    [0.00000000194, 0.8907578144, 25028.521211385],
    [0.00000000194, 5.8680695547, 53285.1848352418],
    [0.00000000193, 0.87395091099, 48733.23133818299],
    [0.00000000182, 4.83822015144, 36301.18868778519],
    [0.00000000164, 2.80460194821, 23969.1392811958],
    [0.00000000223, 1.80096456224, 1596.1864422846],
    [0.00000000166, 3.29457166441, 28306.66024576099],
    [0.00000000218, 4.81622587853, 43071.8992890308],
    [0.00000000161, 1.21595500949, 27043.5028831828],
    [0.00000000157, 4.80754845406, 13521.7514415914],
    [0.00000000175, 2.5703875744, 15874.6175953632],
    [0.00000000144, 1.01433755721, 40853.142184844],
    [0.00000000149, 2.40968521048, 2333.196392872],
    [0.00000000145, 1.27828433128, 1581.959348283],
    [0.00000000138, 0.0314037686, 50586.73338786459],
    [0.00000000142, 2.60156200848, 47623.8527860896],
    [0.00000000131, 4.62346966624, 18849.2275499742],
    [0.00000000134, 4.18320862242, 536.8045120954],
    [0.00000000155, 1.09228324616, 13655.8604911764],
    [0.0000000014, 1.8934823679, 25021.4076643842],
    [0.00000000121, 0.80353664636, 69159.80243060499],
    [0.00000000131, 5.60717229254, 5327.4761083828],
    [0.00000000136, 1.40938714153, 25035.6347583858],
    [0.00000000113, 0.43789858348, 51116.4243529592],
    [0.00000000129, 1.79171833499, 149.5631971346],
    [0.00000000104, 3.3287084758, 54394.56338733519],
    [0.00000000105, 3.46850552319, 46514.4742339962],
    [0.00000000124, 4.53492439003, 18093.37469954999],
    [0.00000000102, 3.82767234865, 20760.4270331914],
    [0.00000000118, 5.77602020844, 7880.08915333899],
    [0.00000000099, 4.8174410172, 35191.8101356918],
    [0.0000000011, 4.89229858743, 7994.5284420242],
    [0.00000000087, 4.3976761864, 39609.6545831656],
    [0.00000000086, 5.59525036006, 25448.00585526019],
    [0.00000000097, 4.43705847961, 632.7837393132],
    [0.00000000084, 0.45574382229, 2648.454825473],
    [0.00000000086, 4.54512479097, 44181.27784112419],
    [0.00000000101, 2.62340092191, 52175.8062831484],
    [0.00000000085, 2.19966641273, 64607.84893354619],
    [0.0000000008, 3.68389622237, 63498.47038145279],
    [0.00000000085, 3.99524055279, 647.0108333148],
    [0.00000000072, 0.98007613104, 26617.5941066688],
    [0.00000000076, 0.26447636431, 25558.2121764796],
    [0.00000000074, 0.85413331129, 33326.5787331742],
    [0.00000000071, 2.03028726078, 85034.42002596818],
    [0.00000000074, 0.14448759211, 58946.51688439399],
    [0.00000000078, 1.44844717469, 76.2660712756],
    [0.00000000071, 2.04664297134, 83925.0414738748],
    [0.00000000057, 5.87714222935, 78263.70942472259],
    [0.00000000057, 6.18395716011, 76674.63652943878],
    [0.00000000054, 2.73596877186, 57837.1383323006],
    [0.00000000053, 4.60904031444, 70269.18098269838],
    [0.00000000052, 4.03952967838, 73711.75592766379],
    [0.00000000055, 0.53059545068, 50057.04242277],
    [0.00000000059, 2.00562549358, 6283.0758499914],
    [0.00000000061, 0.87518792379, 103292.23063610759],
    [0.00000000059, 5.78009156991, 33967.99229491319],
    [0.00000000049, 5.53498293956, 16066.0658614748],
    [0.0000000006, 5.32874946599, 522.5774180938],
    [0.0000000005, 4.26864635281, 27147.28507176339],
    [0.00000000055, 5.86979148192, 26087.9031415742],
    [0.00000000043, 5.27296058848, 89586.37352302698],
    [0.00000000044, 5.79452805302, 60055.89543648739],
    [0.00000000053, 2.34231685086, 29530.4780865396],
    [0.00000000042, 3.92366410709, 46848.3301747656],
    [0.0000000004, 3.16849932346, 956.2891559706],
    [0.0000000004, 3.69832747727, 10021.8372800994],
    [0.00000000044, 0.16619550939, 14477.3511832],
    [0.00000000038, 3.207073899, 3328.13565628019],
    [0.00000000036, 3.2565031442, 100909.03762133139],
    [0.00000000036, 1.57218435479, 77204.32749453338],
    [0.00000000046, 2.92477419257, 6681.2248533996],
    [0.00000000035, 5.12825664587, 110012.94461544899],
    [0.00000000036, 3.43865577615, 53131.406024757],
    [0.00000000038, 2.40753376832, 19804.8272915828],
    [0.00000000038, 4.79685825035, 79373.087976816],
    [0.00000000031, 5.43757314981, 1478.8665740644],
    [0.00000000034, 6.07154786135, 51066.427731055],
    [0.0000000003, 0.21674345767, 105460.99111839019],
    [0.0000000003, 0.17112304208, 40565.2543247742],
    [0.0000000004, 0.14244616544, 59414.4818747484],
    [0.00000000031, 3.96309276391, 129380.13377768178],
    [0.00000000037, 3.17661071143, 99799.65906923798],
    [0.00000000029, 2.26867483394, 56727.7597802072],
    [0.00000000036, 1.11994304212, 24491.71669928959],
    [0.0000000003, 2.10017989797, 74821.13447975718],
    [0.00000000028, 1.57657747004, 41962.5207369374],
    [0.00000000034, 3.58410083037, 80482.46652890938],
    [0.00000000037, 4.65997876381, 12725.453434775],
    [0.00000000028, 5.61695513881, 1162.4747044078],
    [0.00000000035, 0.72968542795, 23754.70674870219],
    [0.00000000031, 0.73785352869, 49842.60989027639],
    [0.00000000027, 3.47382878479, 32370.9789915656],
    [0.00000000029, 4.94559048696, 91785.46086631398],
    [0.00000000026, 0.04921834236, 125887.56221081219],
    [0.00000000024, 5.90443644524, 86143.79857806159],
    [0.00000000024, 0.77569797491, 75930.51303185058],
    [0.00000000029, 6.14347709189, 23869.1460373874],
    [0.00000000025, 1.96949247331, 13541.42120249119],
    [0.00000000023, 0.55122445729, 323.5054166574],
    [0.00000000022, 0.17595982479, 220.4126424388],
    [0.00000000023, 1.67719947686, 24505.94379329119],
    [0.00000000022, 1.35331964958, 103.0927742186],
    [0.00000000021, 1.62259937407, 2111.6503133776],
    [0.00000000022, 4.21274662689, 1692.1656695024],
    [0.00000000023, 4.16797774083, 51123.53789995999],
    [0.0000000002, 2.57529614111, 104351.61256629678],
    [0.0000000002, 1.43758761015, 121335.60871375339],
    [0.00000000023, 4.65203786032, 51109.31080595839],
    [0.0000000002, 3.78548428201, 9384.8410080752],
    [0.00000000019, 2.03578726846, 23439.44831610119],
    [0.00000000019, 4.49863413404, 116783.65521669458],
    [0.00000000024, 2.3619096589, 2125.8774073792],
    [0.00000000022, 3.59058449923, 45405.0956819028],
    [0.00000000021, 4.03957468174, 224.3447957019],
    [0.00000000018, 1.93766633232, 25132.3033999656],
    [0.00000000021, 3.93803272637, 90695.75207512038],
    [0.00000000018, 6.06741300628, 72936.23331633979],
    [0.00000000016, 2.0545017807, 85502.38501632259],
    [0.00000000016, 0.10784603132, 25234.70675982219],
    [0.00000000018, 0.30164004912, 38654.05484155699],
    [0.00000000017, 1.2351728775, 141762.17980617538],
    [0.00000000016, 5.34513156072, 1911.1994832172],
    [0.00000000018, 1.98958398991, 65717.22748563958],
    [0.00000000015, 2.53144227705, 51646.11531805379],
    [0.00000000015, 0.8984944288, 3340.6124266998],
    [0.00000000016, 3.66152596839, 18207.81398823521],
    [0.00000000019, 1.97434766471, 39629.32434406539],
    [0.00000000015, 5.54187887566, 65697.55772473979],
    [0.00000000015, 5.45839422922, 106570.36967048359],
    [0.00000000016, 4.4852247346, 25654.19140369739],
    [0.00000000015, 1.69088707602, 117873.36400788819],
    [0.00000000016, 4.0011545507, 25668.418497699],
    [0.00000000014, 5.31079654808, 27676.976036858],
    [0.00000000016, 0.08264703402, 19.66976089979],
    [0.00000000017, 2.7397934581, 8194.2753332086],
    [0.00000000017, 5.89188530357, 95247.70557217918],
    [0.00000000017, 4.1897241159, 115674.27666460119],
    [0.00000000015, 4.2038836255, 206.1855484372],
    [0.00000000013, 1.91892384579, 136100.84775702318],
    [0.00000000013, 2.05069306389, 91805.13062721379],
    [0.00000000014, 3.09648634531, 860.3099287528],
    [0.00000000013, 4.92732716333, 50593.84693486539],
    [0.00000000016, 2.67144978316, 79219.3091663312],
    [0.00000000014, 2.50844033342, 1223.81784077861],
    [0.00000000012, 3.90241379232, 846.0828347512],
    [0.00000000012, 0.73936767253, 155468.036919256],
    [0.00000000012, 0.07559394293, 49527.35145767539],
    [0.00000000013, 3.19231463256, 110.2063212194],
    [0.00000000012, 1.9633532093, 51535.90899683439],
    [0.00000000012, 2.6521674506, 137210.22630911658],
    [0.00000000013, 0.46707600674, 66653.15746634839],
    [0.00000000012, 0.26431895696, 45892.73043315699],
    [0.00000000015, 3.42397440344, 25874.6040461362],
    [0.00000000014, 4.70502104718, 76144.94556434419],
    [0.00000000012, 0.95737535577, 102018.41617342478],
    [0.00000000011, 3.13609430069, 151975.46535238638],
    [0.00000000011, 2.86316955208, 60370.08161635699],
    [0.00000000013, 2.77558209431, 34282.1784747828],
    [0.00000000014, 5.09655984205, 96357.08412427259],
    [0.00000000013, 1.10885998952, 39743.7636327506],
    [0.00000000011, 3.21334632148, 29416.03879785439],
    [0.00000000012, 3.88554434575, 77211.44104153418],
    [0.0000000001, 4.7125569825, 105307.21230790539],
    [0.0000000001, 0.55469419918, 122444.98726584678],
    [0.00000000012, 4.36961135127, 77197.21394753258],
    [0.00000000013, 4.39642478489, 13362.4497067992],
    [0.00000000011, 5.14259621106, 50579.61984086379],
    [0.00000000011, 3.24615940017, 81591.84508100279],
    [0.00000000009, 1.18023612615, 12546.481939083],
    [0.00000000011, 1.18592961493, 111590.2881578968],
    [0.0000000001, 2.9065692247, 6044.2285813754],
    [0.00000000012, 3.03168453015, 11610.5519583742],
    [0.00000000009, 5.7516398454, 132658.27281205778],
    [0.00000000011, 3.22076779029, 55503.94193942859],
    [0.00000000011, 0.39566751677, 1265.5674786264],
    [0.00000000009, 2.39408307852, 157636.79740153858],
    [0.00000000009, 4.73917172833, 62389.09182935939],
    [0.00000000008, 4.34557925231, 167850.0829477496],
    [0.00000000008, 5.63088394955, 130439.51570787099],
    [0.00000000008, 2.43346934482, 92741.06060792258],
    [0.00000000008, 4.31307453547, 137678.191299471],
    [0.00000000007, 3.34061671905, 107679.74822257696],
    [0.00000000007, 4.90080247109, 131548.89425996438],
    [0.00000000007, 4.45229250799, 19202.75325164339],
    [0.00000000008, 1.08083827503, 66941.04532641819],
    [0.00000000007, 4.67474062737, 26301.2022370122],
    [0.00000000007, 1.94930693741, 949.1756089698],
    [0.00000000007, 2.02199443226, 636.9962720242],
    [0.00000000007, 4.82196356866, 2221.856634597],
    [0.00000000007, 1.95145144842, 1795.258443721],
    [0.00000000006, 3.85971467382, 153084.84390447979],
    [0.00000000006, 1.76663860164, 77623.81213840858],
    [0.00000000007, 3.37440998812, 38813.3565763492],
    [0.00000000006, 1.94973114182, 42153.969003049],
    [0.00000000008, 5.05749222495, 25455.119402261],
    [0.00000000006, 4.98220199549, 6885.14988993081],
    [0.00000000006, 6.11551108888, 51749.20809227239],
    [0.00000000007, 4.91069901701, 34082.4315835984],
    [0.00000000006, 1.87801640884, 138319.60486120995],
    [0.00000000006, 0.51614742672, 112231.70171963578],
    [0.00000000008, 4.85648171957, 61279.713277266],
    [0.00000000007, 4.45760741724, 45290.65639321759],
    [0.00000000006, 1.0084544142, 3178.1457905676],
    [0.00000000006, 2.58312223975, 102762.53967101299],
    [0.00000000006, 3.81061013605, 1485.9801210652],
    [0.00000000007, 4.57071065014, 128850.44281258718],
    [0.00000000006, 5.54674282422, 183724.7005431128],
    [0.00000000006, 2.51291544777, 114.43928868521],
    [0.00000000006, 3.960707015, 24609.0365675098],
    [0.00000000007, 2.74567848958, 35472.7441496494],
    [0.00000000006, 4.50895691793, 97466.46267636596],
    [0.00000000007, 3.68798972574, 68050.42387851159],
    [0.00000000005, 4.74986498598, 143961.2671494624],
    [0.00000000005, 2.80064558137, 51322.60990139639],
    [0.00000000007, 5.00089928023, 467.9649903544],
    [0.00000000005, 5.68909850754, 8989.46770543239],
    [0.00000000007, 4.46975215938, 71378.55953479178],
    [0.00000000007, 0.62762459856, 111122.32316754239],
    [0.00000000005, 1.07413382766, 125112.03959948818],
    [0.00000000006, 2.02091065154, 2703.6161546756],
    [0.00000000005, 2.35003337124, 117893.03376878797],
    [0.00000000006, 0.88668088576, 25661.3049506982],
    [0.00000000005, 5.44059776407, 54087.0057663656],
    [0.00000000005, 3.17940000743, 102232.84870591838],
    [0.00000000005, 4.27339653446, 75615.25459924959],
    [0.00000000005, 2.36775343978, 55618.3812281138],
    [0.00000000005, 5.97279465826, 25551.09862947879],
    [0.00000000006, 2.31104805315, 74.7815985673],
    [0.00000000006, 5.27173304173, 99024.13645791399],
    [0.00000000004, 4.40768268078, 71980.63357473118],
    [0.00000000005, 1.78737244147, 77734.01845962799],
    [0.00000000004, 5.58066636742, 80174.90890793978],
    [0.00000000004, 5.92957093684, 2008.557539159],
    [0.00000000004, 4.98918209749, 162188.75089859738],
    [0.00000000004, 3.79560589694, 735.8765135318],
    [0.00000000004, 1.19086480649, 23976.2528281966],
    [0.00000000004, 3.51053041588, 24925.4284371664],
    [0.00000000005, 3.50295668064, 173511.41499690176],
    [0.00000000004, 6.07545419874, 25131.61398560359],
    [0.00000000004, 6.21188853989, 178063.3684939606],
    [0.00000000004, 3.79361538088, 181555.94006083018],
    [0.00000000004, 3.70610226459, 52705.49724824299],
    [0.00000000004, 0.73870311996, 148532.89040742096],
    [0.00000000004, 1.14523091465, 103285.11708910679],
    [0.00000000004, 5.70327374641, 61165.27398858079],
    [0.00000000004, 5.28580309868, 25440.89230825939],
    [0.00000000004, 1.2867198261, 154938.34595416137],
    [0.00000000004, 5.69623278986, 35077.37084700659],
    [0.00000000004, 3.06148688838, 76667.52298243798],
    [0.00000000004, 4.6524011358, 123554.36581794015],
    [0.00000000004, 1.9517334871, 32132.1317229496],
    [0.00000000003, 3.17825905751, 154194.22245657316],
];

const K2: &[Term] = &[
    [0.00001860568, PI, 0.0],
    [0.00000000602, 4.97746499073, 1109.3785520934],
    [0.00000000276, 4.26650039944, 1589.0728952838],
    [0.00000000261, 3.1885903259, 1059.3819301892],
    [0.00000000103, 5.78715327966, 529.6909650946],
    [0.00000000121, 0.5632388636, 4551.9534970588],
    [0.00000000089, 0.75728951223, 3442.5749449654],
    [0.00000000087, 2.21106245288, 639.897286314],
    [0.00000000074, 1.15731692119, 6770.7106012456],
    [0.00000000094, 2.0221408678, 955.5997416086],
    [0.00000000073, 4.86390467416, 2218.7571041868],
    [0.00000000056, 3.23547465418, 9103.9069941176],
    [0.00000000055, 4.95255864599, 2118.7638603784],
    [0.00000000045, 5.71143698879, 14765.2390432698],
    [0.00000000031, 2.97821125298, 213.299095438],
    [0.00000000032, 6.27059099134, 16983.9961474566],
    [0.0000000003, 4.87057034181, 24498.8302462904],
    [0.00000000035, 3.89943984508, 11322.6640983044],
    [0.00000000028, 3.61592605164, 426.598190876],
    [0.00000000025, 1.22774542136, 853.196381752],
    [0.00000000024, 3.63138295827, 12432.0426503978],
    [0.00000000019, 2.42185974418, 22645.32819660879],
    [0.00000000018, 3.40164963168, 5661.3320491522],
    [0.00000000017, 4.47449217761, 24978.5245894808],
    [0.00000000019, 1.81582122916, 20426.571092422],
    [0.00000000019, 5.21399793848, 7238.6755916],
    [0.00000000015, 0.65754623846, 30639.856638633],
    [0.00000000014, 1.997381309, 19317.1925403286],
    [0.00000000012, 4.86651920364, 21535.9496445154],
    [0.00000000013, 0.87670026086, 2333.196392872],
    [0.00000000011, 1.32359016187, 32858.61374281979],
    [0.00000000009, 3.95937543586, 25028.521211385],
    [0.00000000009, 5.64980110993, 12566.1516999828],
    [0.00000000009, 0.21105658394, 37410.5672398786],
    [0.00000000009, 3.09119536074, 10213.285546211],
    [0.00000000009, 5.84792699585, 13655.8604911764],
    [0.00000000008, 1.0216840079, 7880.08915333899],
    [0.00000000007, 4.82714248043, 28306.66024576099],
    [0.00000000008, 3.35971999798, 7994.5284420242],
    [0.00000000006, 4.16284322772, 23969.1392811958],
    [0.00000000008, 5.33578485341, 27197.2816936676],
    [0.00000000006, 1.49867327091, 50586.73338786459],
    [0.00000000006, 3.63089332238, 38519.945791972],
    [0.00000000007, 6.06174778688, 18093.37469954999],
    [0.00000000007, 5.80453007479, 15874.6175953632],
    [0.00000000006, 1.25084458953, 13521.7514415914],
    [0.00000000006, 1.51084666313, 53285.1848352418],
    [0.00000000006, 4.20073771614, 31749.2351907264],
    [0.00000000004, 4.75352629974, 3328.13565628019],
    [0.00000000004, 5.66305212532, 2648.454825473],
    [0.00000000005, 5.43723511448, 47623.8527860896],
    [0.00000000004, 5.78218305428, 40853.142184844],
    [0.00000000004, 0.94712877289, 25448.00585526019],
    [0.00000000004, 2.52407025365, 51116.4243529592],
    [0.00000000004, 3.63293184265, 6283.0758499914],
    [0.00000000004, 3.28792065738, 35191.8101356918],
    [0.00000000005, 3.92181441712, 25558.2121764796],
];

const K3: &[Term] = &[
    [0.00000079123, 0.0, 0.0],
];

const K4: &[Term] = &[
    [0.0000000059, 0.0, 0.0],
];

const K5: &[Term] = &[
    [0.00000000016, PI, 0.0],
];

const H0: &[Term] = &[
    [0.20072331368, 0.0, 0.0],
    [0.00000722616, 4.54448156539, 1059.3819301892],
    [0.00000352827, 3.3681106187, 1109.3785520934],
    [0.00000463409, 5.90165895822, 5661.3320491522],
    [0.00000252884, 2.25057555643, 4551.9534970588],
    [0.0000014428, 1.93331156378, 529.6909650946],
    [0.00000087802, 2.10612107671, 11322.6640983044],
    [0.00000086133, 5.10647043303, 426.598190876],
    [0.00000089215, 4.76750409396, 25028.521211385],
    [0.0000006145, 1.42439993088, 955.5997416086],
    [0.0000007541, 5.08802569483, 1589.0728952838],
    [0.00000081364, 2.45677555584, 13521.7514415914],
    [0.00000077623, 0.81987268711, 21535.9496445154],
    [0.00000066643, 4.7072971649, 10213.285546211],
    [0.00000064243, 5.94610312142, 26087.9031415742],
    [0.000000493, 3.43683243226, 20426.571092422],
    [0.00000040283, 5.10083863742, 7238.6755916],
    [0.0000003104, 0.59519143527, 12566.1516999828],
    [0.00000024792, 0.99752949906, 14765.2390432698],
    [0.00000027024, 3.31834609026, 27197.2816936676],
    [0.00000030235, 3.28548288411, 6283.0758499914],
    [0.00000020538, 4.58914610789, 16983.9961474566],
    [0.00000019522, 5.84576223475, 6770.7106012456],
    [0.00000025763, 2.00923302118, 37410.5672398786],
    [0.0000001406, 4.80725231965, 9103.9069941176],
    [0.00000012746, 2.3316837235, 3442.5749449654],
    [0.00000013759, 2.62126151603, 213.299095438],
    [0.00000015172, 5.08261510358, 33326.5787331742],
    [0.00000013934, 4.06030293563, 24498.8302462904],
    [0.00000011397, 4.52700338543, 43071.8992890308],
    [0.0000001041, 4.31667037891, 639.897286314],
    [0.00000008384, 5.80798671861, 32858.61374281979],
    [0.00000008055, 2.22975705152, 30639.856638633],
    [0.00000009701, 3.1839249484, 53285.1848352418],
    [0.00000009966, 5.33193164482, 57837.1383323006],
    [0.00000006311, 4.93969926056, 31749.2351907264],
    [0.00000006778, 1.45277682553, 27043.5028831828],
    [0.00000008099, 4.19172221359, 77204.32749453338],
    [0.00000006717, 3.28676854289, 2218.7571041868],
    [0.00000005282, 0.78780465753, 22645.32819660879],
    [0.00000005658, 5.55293141729, 15874.6175953632],
    [0.00000006035, 5.63094296991, 2118.7638603784],
    [0.00000005154, 5.73145133355, 58946.51688439399],
    [0.00000005135, 4.68474599517, 36301.18868778519],
    [0.00000004079, 6.04128175135, 24978.5245894808],
    [0.00000004012, 3.63744343772, 51116.4243529592],
    [0.00000004086, 0.74163606706, 48733.23133818299],
    [0.00000004681, 1.76011415036, 149.5631971346],
    [0.0000000492, 0.33537541562, 73711.75592766379],
    [0.00000004343, 2.75730560959, 52175.8062831484],
    [0.00000004009, 4.68752543369, 1052.2683831884],
    [0.00000003683, 5.7346586389, 47623.8527860896],
    [0.00000003579, 2.04092865825, 12432.0426503978],
    [0.00000004327, 2.39857971042, 50586.73338786459],
    [0.00000004275, 1.88886998788, 65697.55772473979],
    [0.00000003769, 4.34020458655, 69159.80243060499],
    [0.00000004086, 1.30571096121, 1066.49547719],
    [0.00000003994, 0.84981845876, 41962.5207369374],
    [0.00000003975, 1.41729622601, 53131.406024757],
    [0.00000004184, 4.21676591258, 25661.3049506982],
    [0.00000002856, 4.39578860132, 18849.2275499742],
    [0.00000003126, 3.4038858274, 7.1135470008],
    [0.00000002557, 1.44270323546, 39609.6545831656],
    [0.00000002547, 2.01105732146, 38519.945791972],
    [0.00000002891, 2.07448210094, 83925.0414738748],
    [0.00000002846, 1.4133815593, 76.2660712756],
    [0.00000002184, 4.07004828704, 20760.4270331914],
    [0.00000002359, 0.64766442407, 74821.13447975718],
    [0.00000002528, 0.93123329426, 103292.23063610759],
    [0.00000002076, 1.95642837675, 64607.84893354619],
    [0.0000000199, 5.4084705103, 5327.4761083828],
    [0.00000002101, 4.08792220487, 46848.3301747656],
    [0.00000002222, 1.64859210012, 89586.37352302698],
    [0.00000001949, 3.56747787641, 19317.1925403286],
    [0.00000002085, 0.47765457861, 63498.47038145279],
    [0.00000001912, 3.32860420708, 99799.65906923798],
    [0.00000001587, 0.24264331756, 19804.8272915828],
    [0.00000001515, 3.48708267095, 46514.4742339962],
    [0.00000001427, 1.00805124851, 40853.142184844],
    [0.0000000137, 3.23276950759, 54394.56338733519],
    [0.00000001435, 3.26916663665, 28306.66024576099],
    [0.00000001347, 1.43484169739, 25558.2121764796],
    [0.00000001645, 3.10213026674, 6681.2248533996],
    [0.00000001508, 3.33486598243, 23969.1392811958],
    [0.00000001458, 5.47144804838, 85034.42002596818],
    [0.00000001494, 4.60390985676, 85502.38501632259],
    [0.00000001576, 6.1383454387, 19406.6782881746],
    [0.00000001185, 2.10343454847, 419.4846438752],
    [0.00000001239, 3.30222930551, 32370.9789915656],
    [0.00000001241, 4.91853421906, 91785.46086631398],
    [0.00000001059, 3.16900304915, 80482.46652890938],
    [0.00000001202, 0.47501848026, 26617.5941066688],
    [0.0000000112, 4.58824858596, 115674.27666460119],
    [0.00000001078, 5.72964431241, 78263.70942472259],
    [0.00000001069, 1.84077475286, 90695.75207512038],
    [0.00000001004, 4.6255555536, 27147.28507176339],
    [0.0000000123, 4.98958416412, 433.7117378768],
    [0.0000000109, 3.78349735272, 76674.63652943878],
    [0.00000001099, 1.57726658621, 79373.087976816],
    [0.00000001126, 4.02471125239, 72936.23331633979],
    [0.00000000958, 3.00137955304, 105460.99111839019],
    [0.00000000963, 3.53881950825, 59414.4818747484],
    [0.00000001007, 1.3171265512, 3340.6124266998],
    [0.00000000807, 5.30643714308, 16066.0658614748],
    [0.00000000978, 1.09185285334, 13655.8604911764],
    [0.00000000756, 4.453125886, 70269.18098269838],
    [0.00000000773, 4.49557237452, 44181.27784112419],
    [0.0000000077, 1.21563536007, 102762.53967101299],
    [0.0000000072, 0.43090754133, 40565.2543247742],
    [0.00000000857, 3.96533571337, 1692.1656695024],
    [0.0000000075, 4.81323218183, 35191.8101356918],
    [0.00000000969, 3.50035418998, 853.196381752],
    [0.00000000826, 4.519792615, 18093.37469954999],
    [0.00000000699, 5.14377140556, 110012.94461544899],
    [0.00000000717, 0.43897607293, 66653.15746634839],
    [0.00000000893, 1.6583988203, 50057.04242277],
    [0.00000000798, 2.17303507359, 45892.73043315699],
    [0.00000000684, 2.42074424122, 2333.196392872],
    [0.00000000657, 0.38898524949, 14477.3511832],
    [0.00000000631, 4.13366661343, 1581.959348283],
    [0.00000000647, 3.97128573725, 129380.13377768178],
    [0.00000000608, 5.85837559728, 131548.89425996438],
    [0.00000000703, 5.02531752049, 25448.00585526019],
    [0.00000000542, 0.71880854606, 38654.05484155699],
    [0.00000000557, 0.10276764453, 125887.56221081219],
    [0.00000000533, 4.37905252899, 96357.08412427259],
    [0.00000000552, 0.28293741864, 100909.03762133139],
    [0.00000000583, 1.31686424463, 111590.2881578968],
    [0.0000000064, 5.76449409746, 7880.08915333899],
    [0.00000000581, 4.89827781718, 7994.5284420242],
    [0.0000000064, 1.82549676855, 1596.1864422846],
    [0.00000000513, 4.15812478372, 224.3447957019],
    [0.00000000473, 3.02566126813, 106570.36967048359],
    [0.00000000446, 5.72062877742, 60055.89543648739],
    [0.00000000416, 5.67217955958, 86143.79857806159],
    [0.00000000491, 1.05631737273, 105307.21230790539],
    [0.00000000497, 4.63875481162, 25035.6347583858],
    [0.00000000539, 2.70911189639, 95247.70557217918],
    [0.00000000508, 1.73057347183, 25021.4076643842],
    [0.00000000446, 2.67674315317, 956.2891559706],
    [0.00000000398, 3.7916387121, 10021.8372800994],
    [0.00000000511, 0.94638104331, 632.7837393132],
    [0.00000000471, 3.01548909732, 1162.4747044078],
    [0.00000000402, 4.40418923767, 121335.60871375339],
    [0.00000000387, 4.30899243937, 536.8045120954],
    [0.00000000387, 1.34700158607, 141762.17980617538],
    [0.00000000364, 1.50112057115, 74.7815985673],
    [0.00000000335, 2.10574534312, 1478.8665740644],
    [0.00000000359, 2.41109020978, 110.2063212194],
    [0.00000000404, 5.7502796645, 33967.99229491319],
    [0.00000000339, 1.78870527344, 25132.3033999656],
    [0.00000000426, 2.22258061325, 522.5774180938],
    [0.00000000432, 6.16968439743, 2648.454825473],
    [0.00000000399, 5.96869702374, 79219.3091663312],
    [0.0000000031, 1.70633705767, 117873.36400788819],
    [0.00000000311, 0.85845522096, 147423.51185532758],
    [0.00000000387, 3.64279248068, 77837.11123384659],
    [0.00000000287, 2.34456223307, 56727.7597802072],
    [0.0000000035, 2.33612196596, 29530.4780865396],
    [0.00000000336, 3.9314469462, 68050.42387851159],
    [0.00000000277, 3.07410366646, 60370.08161635699],
    [0.0000000028, 2.46359751981, 104351.61256629678],
    [0.00000000328, 1.09721552312, 1375.7737998458],
    [0.00000000298, 5.33949293159, 467.9649903544],
    [0.00000000303, 4.45398600843, 12725.453434775],
    [0.00000000324, 0.33562867259, 92741.06060792258],
    [0.00000000263, 5.58610153174, 112231.70171963578],
    [0.00000000262, 0.6614138793, 75930.51303185058],
    [0.00000000262, 6.0861253468, 51066.427731055],
    [0.00000000246, 2.59631633507, 157636.79740153858],
    [0.00000000249, 3.0715367957, 86457.98475793119],
    [0.00000000226, 0.60671088987, 102018.41617342478],
    [0.00000000227, 2.86652619712, 51646.11531805379],
    [0.00000000278, 4.38518297373, 128850.44281258718],
    [0.00000000287, 0.49890498294, 103.0927742186],
    [0.00000000245, 4.00231510343, 131395.11544947958],
    [0.00000000218, 1.17623331782, 77734.01845962799],
    [0.00000000206, 3.04038049929, 34282.1784747828],
    [0.00000000202, 1.32072207193, 116783.65521669458],
    [0.00000000199, 3.08052278699, 51749.20809227239],
    [0.00000000203, 4.19911912962, 122444.98726584678],
    [0.00000000235, 0.6958701818, 49842.60989027639],
    [0.00000000222, 2.98156013065, 8194.2753332086],
    [0.00000000245, 3.85281520929, 111122.32316754239],
    [0.00000000234, 4.35817241888, 42153.969003049],
    [0.00000000168, 5.86385567233, 137210.22630911658],
    [0.00000000175, 4.37321358756, 137678.191299471],
    [0.00000000211, 0.71583118416, 23754.70674870219],
    [0.00000000166, 1.93204989307, 136100.84775702318],
    [0.00000000164, 3.19893652069, 3328.13565628019],
    [0.00000000163, 0.43163947717, 323.5054166574],
    [0.00000000158, 0.73308392153, 155468.036919256],
    [0.00000000216, 4.20750578735, 647.0108333148],
    [0.00000000159, 5.15593782428, 27676.976036858],
    [0.00000000149, 3.16848882897, 151975.46535238638],
    [0.00000000156, 5.0699506897, 742.9900605326],
    [0.00000000173, 5.56731898386, 1911.1994832172],
    [0.00000000151, 2.1586226454, 163298.1294506908],
    [0.00000000153, 1.88444142866, 91805.13062721379],
    [0.00000000145, 3.53580767632, 38813.3565763492],
    [0.00000000146, 3.85148192173, 173511.41499690176],
    [0.00000000158, 3.82219589815, 125112.03959948818],
    [0.00000000195, 0.39322075697, 25874.6040461362],
    [0.0000000016, 6.14192517329, 23869.1460373874],
    [0.00000000159, 5.32782782637, 71980.63357473118],
    [0.00000000139, 2.59955000883, 23439.44831610119],
    [0.00000000156, 2.82584430295, 11610.5519583742],
    [0.00000000126, 0.50624183059, 128106.31931499895],
    [0.00000000173, 5.32791176605, 24395.7374720718],
    [0.00000000131, 5.7221765085, 76144.94556434419],
    [0.0000000012, 1.82298321678, 117893.03376878797],
    [0.00000000144, 1.923399304, 65717.22748563958],
    [0.00000000126, 1.95959926978, 13541.42120249119],
    [0.00000000117, 4.40641398631, 167850.0829477496],
    [0.00000000116, 6.25692925558, 206.1855484372],
    [0.00000000156, 2.20362336269, 99024.13645791399],
    [0.00000000144, 3.59544086482, 45405.0956819028],
    [0.00000000138, 4.53214236175, 2221.856634597],
    [0.00000000109, 5.7166813286, 80174.90890793978],
    [0.00000000106, 5.96342472744, 846.0828347512],
    [0.00000000121, 0.39436748147, 103925.01437542078],
    [0.00000000101, 5.10428897351, 24505.94379329119],
    [0.00000000122, 0.9291142278, 49527.35145767539],
    [0.00000000124, 6.05860786166, 19.66976089979],
    [0.00000000105, 3.58657057308, 9384.8410080752],
    [0.000000001, 4.38922933224, 2111.6503133776],
    [0.00000000126, 1.02757587156, 102232.84870591838],
    [0.00000000116, 1.94806037211, 39629.32434406539],
    [0.00000000095, 5.23907649369, 62389.09182935939],
    [0.00000000101, 3.23230143898, 2008.557539159],
    [0.00000000097, 0.41480531883, 151199.94274106238],
    [0.00000000117, 5.562816024, 71582.48457132299],
    [0.00000000118, 1.04120986236, 24491.71669928959],
    [0.00000000083, 5.64752760955, 183724.7005431128],
    [0.00000000086, 0.75901895716, 157483.01859105378],
    [0.00000000088, 3.10659740581, 107679.74822257696],
    [0.00000000106, 0.50174700786, 38.1330356378],
    [0.00000000085, 5.68973624203, 54087.0057663656],
    [0.00000000083, 5.11356057551, 189386.03259226496],
    [0.00000000083, 5.3554329828, 138319.60486120995],
    [0.00000000086, 5.70175913291, 106262.81204951399],
    [0.00000000112, 3.22365219372, 2199.087343287],
    [0.00000000101, 4.99203352102, 126996.94076290558],
    [0.00000000092, 2.91070892723, 112545.88789950538],
    [0.00000000077, 5.52641924212, 130439.51570787099],
    [0.0000000009, 0.67191287643, 220.4126424388],
    [0.00000000075, 4.77817220745, 143961.2671494624],
    [0.00000000088, 3.14996672134, 81591.84508100279],
    [0.00000000072, 2.26764924685, 132658.27281205778],
    [0.00000000075, 3.66412729264, 18207.81398823521],
    [0.00000000072, 1.08911606061, 153084.84390447979],
    [0.00000000078, 1.78446499347, 51535.90899683439],
    [0.00000000069, 5.92697012769, 1272.6810256272],
    [0.0000000008, 5.85978083074, 25234.70675982219],
    [0.0000000007, 3.4811865114, 179172.74704605396],
    [0.00000000068, 4.6289135027, 128320.75184749259],
    [0.00000000091, 4.98394171828, 153.7788104848],
    [0.00000000071, 4.54569401719, 44937.1306915484],
    [0.00000000082, 1.19845168298, 154938.34595416137],
    [0.00000000064, 3.6356974548, 1485.9801210652],
    [0.00000000064, 4.89422722191, 1795.258443721],
    [0.00000000072, 3.32519669496, 1265.5674786264],
    [0.00000000074, 5.23718830476, 949.1756089698],
    [0.00000000063, 3.03762464583, 133767.65136415116],
    [0.00000000076, 0.45687654824, 94138.32702008578],
    [0.00000000073, 4.49847121066, 77623.81213840858],
    [0.00000000075, 4.50404348053, 13362.4497067992],
    [0.00000000059, 1.7047116234, 143980.93691036216],
    [0.00000000066, 0.68566404801, 151.0476698429],
    [0.00000000058, 0.89739828294, 24609.0365675098],
    [0.00000000069, 3.27835952315, 52705.49724824299],
    [0.00000000068, 1.11253524966, 39743.7636327506],
    [0.00000000072, 3.17868518886, 55503.94193942859],
    [0.00000000078, 1.28134743897, 25938.3399444396],
    [0.00000000055, 0.60881589726, 199599.31813847594],
    [0.00000000068, 5.97570152338, 148.0787244263],
    [0.00000000064, 6.1179130273, 24925.4284371664],
    [0.00000000057, 3.19531427412, 29416.03879785439],
    [0.00000000053, 5.11421363577, 26514.5013324502],
    [0.00000000068, 2.36624645921, 2125.8774073792],
    [0.0000000006, 2.69480488037, 35472.7441496494],
    [0.00000000061, 4.27968683793, 103821.92160120218],
    [0.00000000059, 5.10696272609, 26301.2022370122],
    [0.00000000049, 0.58582097103, 29428.515568274],
    [0.0000000005, 5.98367787063, 114.3991069134],
    [0.0000000006, 4.33998096994, 25654.19140369739],
    [0.00000000051, 0.33662670306, 144916.86689107097],
    [0.00000000048, 1.15565598735, 163766.0944410452],
    [0.00000000056, 5.28214195676, 75615.25459924959],
    [0.0000000005, 4.32789995331, 123554.36581794015],
    [0.00000000055, 1.19702394805, 66941.04532641819],
    [0.00000000058, 4.76426415583, 118828.96374949679],
    [0.00000000045, 5.04358290141, 45494.58142974879],
    [0.00000000059, 1.04384906458, 25668.418497699],
    [0.00000000054, 5.63996867955, 27999.1026247914],
    [0.00000000054, 4.37575153278, 97466.46267636596],
    [0.00000000044, 0.10086004456, 205260.65018762814],
    [0.00000000044, 3.85828028527, 22747.2907148744],
    [0.00000000049, 2.40398133229, 3462.2447058652],
    [0.00000000043, 2.07549559089, 99979.7361995226],
    [0.00000000047, 2.51184527011, 1223.81784077861],
    [0.00000000049, 0.31002048983, 25131.61398560359],
    [0.00000000054, 1.56934128064, 1905.4647649404],
    [0.00000000043, 0.28327534951, 299.1263942692],
    [0.00000000039, 4.99886296683, 162188.75089859738],
    [0.00000000055, 1.33841323202, 1731.1223529326],
    [0.00000000038, 3.78021792877, 181555.94006083018],
    [0.0000000004, 4.81081210877, 1045.1548361876],
    [0.00000000039, 3.43386638776, 177287.84588263658],
    [0.00000000038, 1.18594365791, 12546.481939083],
    [0.00000000039, 6.23397516124, 178063.3684939606],
    [0.00000000038, 2.70674775878, 6044.2285813754],
    [0.00000000052, 1.91754888568, 24712.1293417284],
    [0.00000000049, 4.89429426764, 61279.713277266],
    [0.00000000046, 4.40813264695, 71378.55953479178],
    [0.00000000037, 2.05483417521, 73891.83305794839],
    [0.00000000035, 3.28240405535, 1089.7087911936],
    [0.00000000035, 1.85704126122, 215473.93573383917],
    [0.00000000043, 1.13317799446, 77197.21394753258],
    [0.00000000039, 1.5786842819, 316.3918696566],
    [0.00000000036, 3.122326289, 171004.7700326452],
    [0.00000000034, 4.96770591173, 68241.8721446232],
    [0.00000000042, 5.51115033447, 31415.379249957],
    [0.00000000033, 1.18637817061, 193937.9860893238],
    [0.00000000041, 4.06415698166, 77211.44104153418],
    [0.00000000035, 4.57995172441, 1063.3140834523],
    [0.00000000032, 0.20015214404, 154194.22245657316],
    [0.00000000034, 4.42892940344, 45290.65639321759],
    [0.00000000032, 4.25034308551, 149642.26895951436],
    [0.00000000037, 6.09943648855, 142871.55835826878],
    [0.00000000031, 4.83425571738, 195047.36464141717],
    [0.00000000038, 2.7138230568, 64901.25971792339],
    [0.00000000031, 1.75477825693, 61560.64729122359],
    [0.00000000036, 1.07214576356, 103711.71527998279],
    [0.00000000038, 4.59679818106, 23866.04650697719],
    [0.0000000003, 4.4383108542, 19202.75325164339],
    [0.00000000036, 2.23840278606, 97670.38771289718],
    [0.0000000003, 1.59737893801, 53235.18821333759],
    [0.00000000031, 3.44116827535, 130012.91751699499],
    [0.00000000031, 4.91506549172, 34082.4315835984],
    [0.0000000003, 3.48541353336, 11.0457002639],
    [0.00000000029, 0.87349725745, 3.881335358],
    [0.00000000033, 5.66059720188, 50579.61984086379],
    [0.00000000033, 1.60197723718, 25455.119402261],
    [0.00000000032, 2.6175188264, 168959.46149984296],
    [0.00000000029, 2.04564672544, 126067.63934109679],
    [0.00000000033, 5.60086785794, 113341.08027172917],
    [0.00000000027, 3.81760675587, 183570.921732628],
    [0.00000000026, 2.89647206521, 159855.55450572536],
    [0.00000000027, 5.54833408842, 139428.98341330336],
    [0.00000000026, 2.42393656494, 209812.60368468694],
    [0.00000000027, 1.60926855771, 154408.65498906677],
    [0.00000000035, 1.3673966202, 1055.4497769261],
    [0.00000000034, 1.54251852953, 6129.2970395066],
    [0.00000000029, 1.51445274452, 98068.53671630539],
    [0.00000000028, 2.3872163986, 55618.3812281138],
    [0.00000000024, 4.99062109724, 6885.14988993081],
    [0.00000000027, 3.48133272731, 77.7505439839],
    [0.00000000027, 3.08503131235, 148532.89040742096],
    [0.00000000026, 5.45655154448, 132350.71519108818],
    [0.00000000023, 1.06468890212, 1169.5882514086],
    [0.00000000029, 5.6366857948, 87253.17713015496],
    [0.00000000023, 1.38188722683, 221135.26778299137],
    [0.00000000029, 3.28754606511, 14.2270940016],
    [0.00000000024, 5.98113303123, 24079.34560241519],
    [0.00000000024, 3.3044813314, 94329.77528619739],
    [0.00000000028, 1.88062304792, 2168.7604822826],
    [0.00000000028, 2.84031770862, 1639.069517188],
    [0.00000000029, 0.41711958452, 3178.1457905676],
    [0.00000000021, 3.1095818259, 231348.55332920235],
    [0.00000000021, 3.51491522872, 51123.53789995999],
    [0.00000000022, 5.66104051486, 61165.27398858079],
    [0.00000000022, 4.27292501278, 181026.24909573558],
    [0.00000000029, 2.32605091054, 50593.84693486539],
    [0.00000000021, 5.67743708331, 8989.46770543239],
    [0.00000000022, 4.79032792397, 23976.2528281966],
    [0.00000000021, 2.38506946489, 156527.41884944518],
    [0.0000000002, 4.92967307559, 72602.37737557039],
    [0.0000000002, 1.84152646572, 32132.1317229496],
    [0.00000000023, 2.01161338644, 47803.9299163742],
    [0.00000000024, 3.42342332906, 860.3099287528],
    [0.00000000018, 0.73670402602, 333.8559407694],
    [0.00000000019, 4.05445495063, 641.41356173899],
    [0.00000000019, 3.66353109364, 225687.22128005017],
    [0.00000000018, 1.56492248382, 170049.1702910366],
    [0.00000000021, 2.41750406305, 51322.60990139639],
    [0.00000000018, 2.60399269216, 114.43928868521],
    [0.0000000002, 2.71161859121, 3.9321532631],
    [0.00000000024, 1.62465048414, 26011.6370702986],
    [0.00000000017, 2.22541275925, 636.9962720242],
    [0.0000000002, 1.06455124487, 138633.7910410796],
    [0.00000000017, 6.11497503202, 197092.67317421938],
    [0.00000000017, 4.71686676953, 119784.56349110538],
    [0.00000000017, 0.70126700944, 51109.31080595839],
    [0.00000000016, 3.1631963989, 164721.69418265377],
    [0.00000000016, 5.67498545055, 35077.37084700659],
    [0.00000000017, 5.70246373363, 28206.6670019526],
    [0.00000000021, 2.79598255852, 9745.3205558566],
    [0.00000000019, 0.54220205142, 129215.69786709236],
    [0.00000000016, 6.2293568228, 25551.09862947879],
    [0.00000000016, 5.46069292741, 165516.88655487756],
    [0.00000000016, 4.7024978322, 93696.66034953119],
    [0.00000000021, 0.65495945779, 1699.2792165032],
    [0.00000000019, 4.20117441465, 58458.88213313979],
    [0.00000000019, 0.5813452412, 103127.79472551816],
    [0.00000000018, 2.79856485484, 4022.2625319642],
    [0.00000000017, 0.24972083359, 17893.6278083656],
    [0.0000000002, 1.25048738451, 1073.6090241908],
    [0.00000000015, 0.48464193407, 155303.60100866656],
    [0.00000000015, 0.79420224242, 1485.2907067032],
    [0.00000000014, 0.20033134446, 203375.74902421076],
    [0.00000000014, 2.43520686188, 28421.0995344462],
    [0.00000000015, 0.60884025826, 77039.89158394396],
    [0.00000000019, 1.81617003885, 2703.6161546756],
    [0.00000000015, 4.10907314004, 1685.0521225016],
    [0.00000000013, 6.2296340909, 210921.98223678037],
    [0.00000000014, 3.7340648053, 1574.8458012822],
    [0.00000000014, 4.42293875709, 24292.64469785319],
    [0.00000000014, 6.17950570019, 49957.0491789616],
    [0.00000000016, 0.90215768427, 58220.0348645238],
    [0.00000000014, 1.14054500632, 25565.3257234804],
    [0.00000000013, 1.2769263583, 4371.8763667742],
    [0.00000000016, 5.72421513923, 49.9966219042],
    [0.00000000016, 4.84573212589, 440.8252848776],
    [0.00000000013, 5.84348543674, 190809.59732422797],
    [0.00000000013, 5.25664075214, 16703.062133499],
    [0.00000000016, 3.22833578988, 120226.23016165999],
    [0.00000000013, 0.32103283946, 5193.3670587978],
    [0.00000000013, 4.22278343006, 189853.99758261937],
    [0.00000000013, 4.9053916313, 241561.83887541335],
    [0.00000000013, 2.01104523239, 430.5303441391],
    [0.00000000012, 2.74898212231, 917.9302859818],
    [0.00000000014, 0.19663180534, 48997.6604925808],
    [0.00000000016, 5.0901171008, 2751.5475996916],
    [0.00000000012, 4.36719043479, 247223.17092456558],
    [0.00000000016, 0.32150479987, 23962.02573419499],
    [0.00000000012, 4.25370326301, 2324.9494088156],
    [0.00000000013, 3.77252172274, 48835.19385644859],
    [0.00000000012, 1.27429079173, 170068.84005193636],
    [0.00000000016, 4.1340516106, 2538.2485042536],
    [0.00000000013, 4.11908589112, 103285.11708910679],
    [0.00000000014, 4.35225661525, 25344.9130810416],
    [0.00000000014, 1.94940638043, 21716.0267748],
    [0.00000000015, 4.77081015206, 76571.54375522019],
    [0.00000000013, 5.14024029917, 25440.89230825939],
    [0.00000000011, 4.07822791548, 175730.17210108857],
    [0.00000000012, 1.85844811277, 22909.7573510066],
    [0.00000000011, 2.67662155066, 237009.88537835455],
    [0.00000000014, 0.05315304561, 579.6875869988],
    [0.00000000016, 0.1463645095, 2014.9816717978],
    [0.00000000014, 2.53599417501, 32769.1279949738],
    [0.00000000012, 5.81492155859, 24601.92302050899],
    [0.00000000012, 4.5646896516, 127791.06088239799],
    [0.00000000015, 1.06148242581, 129909.82474277639],
    [0.00000000011, 5.76060885, 6751.0408403458],
    [0.00000000013, 6.09548361815, 1884.9011634174],
    [0.00000000011, 0.70898712759, 1135.6768718932],
    [0.00000000015, 4.13490037198, 184834.07909520617],
    [0.00000000012, 0.81676840129, 1802.3719907218],
    [0.00000000012, 5.26473348803, 77410.51304297059],
    [0.00000000015, 1.11766712158, 13675.5302520762],
    [0.00000000011, 4.07299542526, 129799.61842155698],
    [0.00000000011, 3.46808239882, 64741.95798313119],
    [0.00000000011, 4.03545764873, 50483.640613646],
    [0.00000000012, 3.72388983557, 3308.4658953804],
    [0.00000000014, 5.38915549481, 26720.68688088739],
    [0.00000000011, 0.79677709794, 158746.17595363196],
    [0.0000000001, 0.62654964498, 50951.98844236979],
    [0.00000000011, 0.66815670501, 415.5524906121],
    [0.0000000001, 3.01520921963, 90989.16285949759],
    [0.00000000012, 3.72504889267, 3492.5715668696],
    [0.00000000013, 0.80361385149, 103299.34418310839],
    [0.00000000011, 3.09123085605, 225.8292684102],
    [0.00000000011, 1.95344971662, 12412.372889498],
    [0.00000000011, 4.78853576424, 76681.75007643958],
    [0.00000000011, 5.2441263245, 222.8603229936],
    [0.00000000013, 5.05986119287, 422.6660376129],
    [0.00000000013, 5.20106294749, 25863.55834587229],
    [0.00000000011, 3.79648102462, 164407.50800278416],
    [0.0000000001, 3.36863616235, 24815.222115947],
    [0.00000000012, 2.95718060691, 49953.94964855139],
    [0.0000000001, 4.66841546318, 145872.4666326796],
    [0.00000000011, 1.7661741705, 145090.31546245556],
    [0.0000000001, 3.01526943745, 204151.27163553477],
    [0.0000000001, 5.87181566906, 2974.609954611],
    [0.00000000012, 1.80861706882, 119002.41232088137],
    [0.00000000011, 0.06126000613, 77154.33087262919],
    [0.00000000013, 6.06781069575, 78050.41032928458],
    [0.0000000001, 4.63060836076, 75085.56363415498],
    [0.00000000009, 0.54529953487, 207643.8432024044],
    [0.00000000011, 0.2434456666, 4083.9885067044],
    [0.0000000001, 1.8389749683, 92914.50917930716],
    [0.00000000011, 4.66450252181, 67608.75720795698],
    [0.00000000009, 1.78051888902, 188276.6540401716],
    [0.00000000009, 3.59311826657, 628.8515860501],
    [0.00000000009, 4.36214267765, 26727.8004278882],
    [0.0000000001, 3.71450234996, 71492.99882347698],
    [0.00000000012, 2.88553835235, 1083.0802322936],
    [0.00000000012, 4.54039760955, 2641.3412784722],
    [0.00000000009, 4.88528539259, 9123.5767550174],
    [0.00000000012, 1.34324819043, 24182.4383766338],
    [0.00000000009, 5.24440292653, 123758.29085447139],
    [0.00000000009, 4.25007844472, 220025.88923089797],
    [0.00000000008, 3.82964346362, 51962.5071877104],
    [0.00000000008, 5.96988839258, 2686.7220945412],
    [0.00000000011, 0.11956554196, 437.6438911399],
    [0.00000000008, 6.14980999318, 257436.45647077652],
    [0.00000000008, 1.94207634322, 1243.4876016784],
    [0.0000000001, 0.15558920072, 120417.67842777158],
    [0.00000000009, 0.77637547948, 76667.52298243798],
    [0.00000000009, 5.33394461786, 15406.65260500879],
    [0.00000000008, 4.55556420998, 191.4482661116],
    [0.00000000008, 3.73036656181, 26.2983197998],
    [0.00000000008, 2.23941844614, 487.6347512542],
    [0.00000000008, 5.17773829653, 1263.15736257819],
    [0.0000000001, 2.16409967795, 117.3198682202],
    [0.00000000008, 0.63413867429, 24864.08530079559],
    [0.00000000008, 0.20723946478, 156100.82065856917],
    [0.00000000008, 0.59825436005, 209658.82487420217],
    [0.00000000007, 0.38480210012, 181391.50415024077],
    [0.00000000008, 2.89237522712, 25241.820306823],
    [0.00000000008, 1.70309526741, 171178.21860402977],
    [0.00000000008, 0.23421061661, 16342.5825857176],
    [0.00000000009, 4.92485537501, 50049.92887576919],
    [0.00000000009, 2.16881886766, 703.6331846174],
    [0.00000000007, 2.50702526164, 50064.15596977079],
    [0.0000000001, 1.98645510244, 51220.20654153979],
    [0.00000000008, 3.89432655409, 2015.6710861598],
    [0.00000000008, 5.87632267305, 24822.3356629478],
    [0.00000000008, 4.28636961981, 1368.660252845],
    [0.00000000007, 6.24681874188, 84307.93800609799],
    [0.00000000007, 2.51976704748, 216897.50046580215],
    [0.00000000008, 5.48609797769, 235900.50682626115],
    [0.00000000007, 1.8598747236, 66826.60603773296],
    [0.00000000009, 4.75804145738, 180496.558130641],
    [0.00000000007, 2.96356865615, 1382.8873468466],
    [0.00000000008, 4.77617576873, 26610.48055966799],
    [0.00000000007, 1.56487517744, 5019.9184874132],
    [0.00000000007, 2.2736191458, 1471.7530270636],
    [0.00000000007, 4.04173605935, 10681.2505365654],
    [0.00000000007, 4.33807113875, 2820.8311441262],
    [0.00000000007, 1.0666077396, 113501.48764111398],
    [0.00000000007, 5.63089608587, 263097.78851992876],
    [0.00000000007, 4.09280981256, 124156.43985787958],
    [0.00000000007, 1.67108281947, 152155.54248267098],
    [0.00000000006, 2.87026356261, 223180.57631579356],
    [0.00000000009, 2.62975840356, 1577.3435424478],
    [0.00000000007, 3.61490594044, 19336.86230122839],
    [0.00000000007, 1.07307075441, 87648.55043279778],
    [0.00000000006, 1.07432484224, 139589.3907826882],
    [0.00000000008, 1.50404970934, 102769.65321801379],
    [0.00000000007, 2.16047683056, 963.4027029714],
    [0.00000000006, 3.69419083251, 44295.7171298094],
    [0.00000000006, 0.97851168989, 28791.5192962498],
    [0.00000000006, 5.41913590864, 5635.0337293524],
    [0.00000000006, 3.24257698067, 5687.630368952],
    [0.00000000006, 6.23880627823, 22759.76748529401],
    [0.00000000007, 5.79346201686, 78793.40038981718],
    [0.00000000007, 5.63446709399, 200708.69669056937],
    [0.00000000007, 1.83566073021, 103498.41618454478],
    [0.00000000006, 1.80107386045, 153878.9640239722],
    [0.00000000008, 1.41444587341, 5815.11085963699],
    [0.00000000006, 3.06844078467, 108789.12677467037],
    [0.00000000006, 3.35624306162, 82815.66292178139],
    [0.00000000008, 5.03014347296, 2352.8661537718],
    [0.00000000006, 0.05712024267, 54879.422437824],
    [0.00000000006, 1.0549048958, 207114.15223730978],
    [0.00000000007, 5.92620132233, 735.8765135318],
    [0.00000000007, 3.66034639865, 158438.6183326624],
    [0.00000000007, 0.34343805056, 307.5576209696],
    [0.00000000008, 4.43127569085, 7768.3665566946],
    [0.00000000007, 3.03541758523, 134877.02991624456],
    [0.00000000006, 1.1880666964, 65831.6667743248],
    [0.00000000007, 2.03086517207, 134.109049585],
    [0.00000000005, 5.09653914912, 309.2783226558],
    [0.00000000005, 4.02579888855, 1155.361157407],
    [0.00000000006, 3.87069900272, 23336.3555418826],
    [0.00000000005, 4.52919528469, 180282.12559814737],
    [0.00000000006, 1.39983476167, 226796.59983214355],
    [0.00000000007, 0.70800843903, 78114.14622758799],
    [0.00000000006, 0.44016509179, 251775.12442162435],
    [0.00000000007, 3.98510382271, 25619.9381512198],
    [0.00000000006, 4.4759034164, 102755.42612401219],
    [0.00000000005, 3.9898847181, 252884.50297371778],
    [0.00000000005, 6.01047566738, 184526.5214742366],
    [0.00000000006, 3.53880558462, 543.9180590962],
    [0.00000000005, 4.7531868097, 27140.17152476259],
    [0.00000000006, 2.9896073368, 160964.93305781877],
    [0.00000000006, 0.44183007344, 4398.17468657401],
    [0.00000000005, 0.32232504653, 76784.84285065818],
    [0.00000000006, 0.56718869093, 95.9792272178],
    [0.00000000006, 5.93117959827, 1898.3512179396],
    [0.00000000005, 1.98914585432, 53764.8791784322],
    [0.00000000006, 0.36693671474, 621.7438008392],
    [0.00000000006, 5.43503271199, 182615.3219910194],
    [0.00000000005, 1.60748258061, 101703.15774082378],
    [0.00000000005, 4.90968447136, 4525.655177259],
    [0.00000000005, 1.11398062966, 273311.0740661397],
    [0.00000000005, 4.71880048723, 50167.24874398939],
    [0.00000000005, 5.12343625541, 1593.0050485469],
    [0.00000000006, 1.98473325862, 1279.794572628],
    [0.00000000005, 1.04548134308, 117077.06600107178],
    [0.00000000005, 1.35635517593, 27154.3986187642],
    [0.00000000005, 6.18829604349, 8044.5250639284],
    [0.00000000006, 3.90766859767, 2854.6403739102],
    [0.00000000005, 2.94912252082, 37698.4550999484],
    [0.00000000006, 4.609503791, 41520.8540663828],
    [0.00000000005, 3.82474337764, 7392.4544020848],
    [0.00000000005, 3.09212310883, 82701.22363309616],
    [0.00000000005, 3.52209395293, 26507.38778544939],
    [0.00000000005, 2.29725685823, 210614.42461581077],
    [0.00000000005, 5.24351737521, 191604.78969645177],
    [0.00000000006, 0.57256278996, 2544.6726368924],
    [0.00000000005, 5.23790269084, 330.6189636582],
    [0.00000000005, 1.87162721458, 40738.70289615879],
    [0.00000000005, 2.64159490226, 25764.39772491679],
    [0.00000000005, 5.51990791991, 77101.23472031478],
    [0.00000000005, 4.57407050951, 1353.7487450168],
    [0.00000000005, 4.44837624724, 7830.0925314348],
    [0.00000000006, 2.90083070617, 2655.5683724738],
    [0.00000000004, 3.53369858271, 36109.7404216736],
    [0.00000000005, 2.73315679617, 4578.2518168586],
    [0.00000000005, 1.68729410367, 1603.2999892854],
    [0.00000000006, 4.57233500659, 2045.3085328022],
    [0.00000000005, 1.60955167723, 102659.44689679438],
    [0.00000000005, 5.18696521091, 88476.99497093359],
    [0.00000000004, 3.25976354348, 229463.65216578494],
    [0.00000000005, 1.03309673288, 87413.5844995398],
    [0.00000000005, 1.91087026772, 1585.1407420207],
    [0.00000000004, 4.63255427388, 196137.07343261078],
    [0.00000000005, 3.77042428359, 77829.99768684579],
    [0.00000000005, 5.92059914627, 3776.4308857348],
    [0.00000000004, 0.3459786006, 4268.0941781936],
    [0.00000000004, 1.67879416968, 267649.7420169875],
    [0.00000000004, 2.50817797731, 515.463871093],
    [0.00000000005, 0.37358679631, 77844.22478084739],
    [0.00000000005, 1.04139917267, 9591.5417453718],
    [0.00000000004, 4.50337389232, 25042.7483053866],
    [0.00000000004, 1.89004002188, 25014.29411738339],
    [0.00000000005, 2.30662876935, 29550.14784743939],
    [0.00000000004, 2.65560554721, 959.1228599576],
    [0.00000000004, 1.87305702611, 14650.79975458459],
    [0.00000000004, 4.29736707546, 124663.74437003357],
    [0.00000000004, 2.92036210967, 187052.83619939297],
    [0.00000000004, 4.79098404978, 5039.588248313],
    [0.00000000004, 3.7130557804, 2383.1930147762],
    [0.00000000005, 2.2842725308, 74923.09699802278],
    [0.00000000005, 2.92750367354, 10059.5067357262],
    [0.00000000004, 5.24419678853, 51219.51712717779],
    [0.00000000004, 0.1145744006, 52026.2430860138],
    [0.00000000004, 5.67431555607, 2214.7430875962],
    [0.00000000004, 2.22822521725, 185943.45764729957],
    [0.00000000004, 4.7320154649, 25024.58905812189],
    [0.00000000004, 1.66139977951, 25032.45336464809],
    [0.00000000004, 4.53668301698, 15432.9509248086],
    [0.00000000005, 4.21258944152, 50689.82616208319],
    [0.00000000004, 3.33769868366, 952.0766232596],
    [0.00000000004, 5.9789848902, 77307.42026875199],
];

const H1: &[Term] = &[
    [0.00143750118, 0.0, 0.0],
    [0.0000002336, 4.87920447378, 1109.3785520934],
    [0.00000020286, 2.97846425427, 1059.3819301892],
    [0.00000008212, 0.75759843888, 4551.9534970588],
    [0.00000006115, 3.9483815228, 1589.0728952838],
    [0.00000002973, 2.73433383649, 955.5997416086],
    [0.00000002973, 3.5783920349, 11322.6640983044],
    [0.00000002336, 3.62675112132, 426.598190876],
    [0.00000001947, 1.08278053665, 6770.7106012456],
    [0.00000001823, 1.85022795948, 529.6909650946],
    [0.00000001624, 5.75452983277, 14765.2390432698],
    [0.00000001696, 0.79631339774, 3442.5749449654],
    [0.00000001397, 3.2753260042, 9103.9069941176],
    [0.00000001534, 2.31136490464, 639.897286314],
    [0.00000001377, 6.08746438273, 16983.9961474566],
    [0.00000001403, 1.91091503671, 20426.571092422],
    [0.00000001105, 0.05426875196, 7238.6755916],
    [0.00000001083, 0.09668895133, 1052.2683831884],
    [0.00000001305, 5.90684657299, 1066.49547719],
    [0.00000000964, 4.76836911326, 27197.2816936676],
    [0.0000000112, 4.82451247332, 2218.7571041868],
    [0.00000000851, 5.09607544532, 24498.8302462904],
    [0.00000000833, 4.58212971415, 2118.7638603784],
    [0.00000000846, 5.3578161193, 12566.1516999828],
    [0.00000000572, 1.01173680068, 32858.61374281979],
    [0.0000000053, 2.29872665426, 22645.32819660879],
    [0.00000000527, 0.67546619795, 30639.856638633],
    [0.00000000585, 2.72508228903, 15874.6175953632],
    [0.00000000476, 3.56697795536, 12432.0426503978],
    [0.00000000424, 0.48484585677, 5661.3320491522],
    [0.00000000523, 1.73288243507, 7.1135470008],
    [0.00000000433, 5.95512555756, 43071.8992890308],
    [0.00000000405, 4.49227357316, 24978.5245894808],
    [0.00000000492, 0.8715224485, 31749.2351907264],
    [0.00000000326, 1.82756200388, 21535.9496445154],
    [0.00000000308, 3.80016788733, 419.4846438752],
    [0.00000000387, 5.97532121757, 51116.4243529592],
    [0.00000000398, 2.08072776951, 47623.8527860896],
    [0.00000000284, 2.21794553815, 48733.23133818299],
    [0.00000000385, 3.31021020261, 433.7117378768],
    [0.00000000257, 3.5140542462, 38519.945791972],
    [0.00000000262, 1.45338438946, 853.196381752],
    [0.00000000259, 2.01945144721, 19317.1925403286],
    [0.00000000233, 3.0869035707, 37410.5672398786],
    [0.00000000244, 0.27721436166, 10213.285546211],
    [0.00000000211, 0.85723237826, 58946.51688439399],
    [0.00000000195, 2.6807222481, 27043.5028831828],
    [0.00000000245, 5.50362142351, 213.299095438],
    [0.00000000181, 4.38027318948, 23969.1392811958],
    [0.00000000191, 4.7878062115, 28306.66024576099],
    [0.00000000244, 3.32267335309, 63498.47038145279],
    [0.00000000224, 0.22512072287, 1596.1864422846],
    [0.00000000214, 3.75623221727, 39609.6545831656],
    [0.00000000172, 6.06363028487, 25028.521211385],
    [0.0000000016, 0.87287098514, 2333.196392872],
    [0.00000000153, 4.33122212474, 53285.1848352418],
    [0.00000000148, 3.42292903438, 64607.84893354619],
    [0.00000000143, 5.70995670399, 40853.142184844],
    [0.00000000154, 3.69904518705, 13521.7514415914],
    [0.00000000145, 5.98426640917, 1581.959348283],
    [0.0000000014, 4.72872709731, 54394.56338733519],
    [0.00000000155, 3.15646282169, 36301.18868778519],
    [0.0000000015, 3.43879795483, 25021.4076643842],
    [0.00000000131, 3.05662122718, 18849.2275499742],
    [0.00000000163, 5.82734631918, 13655.8604911764],
    [0.00000000146, 2.95471266259, 25035.6347583858],
    [0.00000000134, 4.04936420117, 5327.4761083828],
    [0.00000000129, 0.22728507141, 149.5631971346],
    [0.00000000152, 0.62134105794, 25558.2121764796],
    [0.00000000111, 5.34986528943, 20760.4270331914],
    [0.00000000137, 6.04986036427, 18093.37469954999],
    [0.00000000128, 1.02071373693, 7880.08915333899],
    [0.0000000012, 1.20595376625, 52175.8062831484],
    [0.00000000105, 2.04275498771, 74821.13447975718],
    [0.00000000122, 3.86293389589, 522.5774180938],
    [0.00000000102, 2.72403603984, 536.8045120954],
    [0.000000001, 1.84183302156, 46514.4742339962],
    [0.00000000103, 6.00795200217, 44181.27784112419],
    [0.00000000116, 3.3506793162, 7994.5284420242],
    [0.00000000132, 4.56719408193, 79373.087976816],
    [0.000000001, 3.24540812904, 35191.8101356918],
    [0.00000000093, 0.8303310739, 25448.00585526019],
    [0.00000000093, 5.57364133839, 69159.80243060499],
    [0.00000000086, 4.27905526943, 76674.63652943878],
    [0.00000000088, 3.72660847809, 19804.8272915828],
    [0.00000000084, 5.16438335856, 2648.454825473],
    [0.00000000081, 0.49162207765, 26087.9031415742],
    [0.00000000087, 0.58146676541, 83925.0414738748],
    [0.00000000078, 4.62681896866, 80482.46652890938],
    [0.00000000078, 5.94274897255, 70269.18098269838],
    [0.00000000094, 2.75349716586, 632.7837393132],
    [0.00000000075, 4.86585348906, 50586.73338786459],
    [0.00000000073, 5.67745769199, 26617.5941066688],
    [0.00000000085, 2.42048383012, 647.0108333148],
    [0.00000000094, 0.02769312636, 59414.4818747484],
    [0.00000000078, 6.15181749562, 76.2660712756],
    [0.00000000075, 5.67432960369, 103292.23063610759],
    [0.00000000064, 5.3155331456, 46848.3301747656],
    [0.00000000062, 4.3350144173, 78263.70942472259],
    [0.00000000063, 1.85361503358, 99799.65906923798],
    [0.0000000006, 0.9444245349, 60055.89543648739],
    [0.00000000057, 6.21613536045, 33326.5787331742],
    [0.00000000054, 0.76291316824, 16066.0658614748],
    [0.00000000067, 0.99091247749, 33967.99229491319],
    [0.00000000058, 5.29479168155, 73711.75592766379],
    [0.00000000054, 0.5347318057, 85034.42002596818],
    [0.00000000053, 3.23003064858, 90695.75207512038],
    [0.00000000053, 2.83791023873, 50057.04242277],
    [0.00000000066, 5.81702460518, 95247.70557217918],
    [0.00000000055, 0.78067937012, 29530.4780865396],
    [0.00000000042, 1.56540349072, 956.2891559706],
    [0.00000000046, 4.07651621492, 57837.1383323006],
    [0.00000000047, 1.70680589609, 14477.3511832],
    [0.00000000045, 0.24149595713, 89586.37352302698],
    [0.00000000041, 4.74030743731, 3328.13565628019],
    [0.00000000048, 2.67232158132, 27147.28507176339],
    [0.0000000004, 0.86656433312, 86143.79857806159],
    [0.00000000039, 2.13597407583, 10021.8372800994],
    [0.00000000038, 5.82431893998, 96357.08412427259],
    [0.00000000038, 1.69543661474, 40565.2543247742],
    [0.00000000038, 3.60887757821, 110012.94461544899],
    [0.00000000038, 3.13082767438, 115674.27666460119],
    [0.00000000036, 1.66614621033, 206.1855484372],
    [0.00000000046, 1.42369975998, 6681.2248533996],
    [0.00000000034, 2.42756665723, 129380.13377768178],
    [0.00000000039, 2.24202206738, 23754.70674870219],
    [0.00000000032, 3.86149620973, 1478.8665740644],
    [0.00000000033, 4.48508445814, 51066.427731055],
    [0.00000000031, 4.86184954318, 125887.56221081219],
    [0.0000000004, 6.21243409351, 12725.453434775],
    [0.00000000034, 3.43458135122, 91785.46086631398],
    [0.00000000033, 2.15691286878, 75930.51303185058],
    [0.00000000039, 2.64731898265, 24491.71669928959],
    [0.00000000032, 1.47649638301, 105460.99111839019],
    [0.00000000037, 2.20761297284, 49842.60989027639],
    [0.00000000028, 0.65418869565, 56727.7597802072],
    [0.00000000037, 2.66448969446, 79219.3091663312],
    [0.00000000027, 3.97898901738, 1162.4747044078],
    [0.00000000027, 2.01350722954, 32370.9789915656],
    [0.00000000027, 3.49363413506, 13541.42120249119],
    [0.00000000027, 1.78228999567, 100909.03762133139],
    [0.00000000025, 3.26374227408, 24505.94379329119],
    [0.00000000029, 2.8132536464, 77204.32749453338],
    [0.0000000003, 4.5897769049, 23869.1460373874],
    [0.00000000024, 4.41730726821, 106570.36967048359],
    [0.00000000025, 2.64872441737, 53131.406024757],
    [0.00000000024, 4.4070771618, 131548.89425996438],
    [0.00000000023, 6.11731546563, 141762.17980617538],
    [0.00000000022, 2.07975060173, 102018.41617342478],
    [0.00000000022, 1.03937241668, 104351.61256629678],
    [0.00000000021, 5.26147773071, 323.5054166574],
    [0.00000000028, 0.79241748569, 111122.32316754239],
    [0.00000000021, 1.6431256381, 66653.15746634839],
    [0.00000000021, 0.04628284583, 2111.6503133776],
    [0.00000000022, 2.63706839187, 1692.1656695024],
    [0.00000000021, 3.62977074995, 23439.44831610119],
    [0.00000000021, 5.35502117677, 9384.8410080752],
    [0.0000000002, 0.76630743201, 102762.53967101299],
    [0.00000000019, 0.74414804766, 112231.70171963578],
    [0.00000000021, 2.71182604976, 121335.60871375339],
    [0.00000000024, 0.78605381821, 2125.8774073792],
    [0.00000000019, 3.37592776072, 91805.13062721379],
    [0.00000000023, 2.01699296181, 45405.0956819028],
    [0.00000000022, 3.4688878331, 39629.32434406539],
    [0.00000000022, 3.43072152564, 65717.22748563958],
    [0.00000000017, 1.62900590235, 25234.70675982219],
    [0.00000000021, 5.49308348956, 220.4126424388],
    [0.00000000018, 0.3688620135, 25132.3033999656],
    [0.00000000021, 2.4606127539, 224.3447957019],
    [0.00000000017, 0.6177047436, 1911.1994832172],
    [0.00000000016, 2.11390306985, 18207.81398823521],
    [0.00000000018, 5.00881936927, 38654.05484155699],
    [0.00000000016, 0.15439973146, 117873.36400788819],
    [0.00000000017, 5.54552475721, 25668.418497699],
    [0.00000000017, 6.09085550997, 111590.2881578968],
    [0.00000000017, 6.02959619408, 25654.19140369739],
    [0.00000000015, 1.09290521677, 157636.79740153858],
    [0.00000000018, 1.62740371992, 19.66976089979],
    [0.00000000018, 4.28957092115, 8194.2753332086],
    [0.00000000014, 3.72797439512, 76144.94556434419],
    [0.00000000014, 0.37879012628, 136100.84775702318],
    [0.00000000014, 5.68289387028, 147423.51185532758],
    [0.00000000018, 2.53109709864, 41962.5207369374],
    [0.00000000014, 4.29352764963, 60370.08161635699],
    [0.00000000014, 3.03739436716, 116783.65521669458],
    [0.00000000013, 3.72837517684, 27676.976036858],
    [0.00000000014, 1.93518334628, 45892.73043315699],
    [0.00000000014, 1.5221054458, 860.3099287528],
    [0.00000000015, 0.9644286029, 1223.81784077861],
    [0.00000000012, 1.6242733142, 151975.46535238638],
    [0.00000000012, 5.47297197483, 155468.036919256],
    [0.00000000016, 5.45936215296, 51749.20809227239],
    [0.00000000013, 2.86295386303, 77197.21394753258],
    [0.00000000012, 3.29248194306, 117893.03376878797],
    [0.00000000012, 2.00354655862, 49527.35145767539],
    [0.00000000012, 4.72366823704, 29416.03879785439],
    [0.00000000012, 2.32554134075, 846.0828347512],
    [0.00000000014, 4.29376124456, 34282.1784747828],
    [0.00000000012, 5.6132708634, 122444.98726584678],
    [0.00000000013, 2.37889229893, 77211.44104153418],
    [0.00000000012, 3.94892912449, 137210.22630911658],
    [0.00000000015, 5.31449266267, 99024.13645791399],
    [0.00000000013, 4.6949874193, 55503.94193942859],
    [0.00000000012, 5.32017587133, 72936.23331633979],
    [0.00000000014, 4.65346348125, 81591.84508100279],
    [0.00000000013, 5.82743353149, 39743.7636327506],
    [0.00000000011, 5.30596815027, 38813.3565763492],
    [0.00000000011, 4.59462277176, 107679.74822257696],
    [0.0000000001, 2.87044546256, 167850.0829477496],
    [0.00000000011, 1.06511097395, 50579.61984086379],
    [0.0000000001, 1.94695810314, 128106.31931499895],
    [0.0000000001, 5.92000843421, 12546.481939083],
    [0.00000000011, 1.76612302603, 3340.6124266998],
    [0.0000000001, 1.40414642225, 110.2063212194],
    [0.00000000011, 3.84512709368, 25874.6040461362],
    [0.00000000012, 2.06725436046, 126996.94076290558],
    [0.0000000001, 4.48184360252, 6044.2285813754],
    [0.00000000009, 2.35485243513, 173511.41499690176],
    [0.00000000013, 2.82698140982, 13362.4497067992],
    [0.00000000012, 1.46969504625, 11610.5519583742],
    [0.00000000009, 2.82388082078, 137678.191299471],
    [0.00000000011, 5.10287828388, 1265.5674786264],
    [0.00000000009, 4.76759307657, 25661.3049506982],
    [0.0000000001, 3.13163580233, 128850.44281258718],
    [0.00000000008, 4.08634453934, 130439.51570787099],
    [0.0000000001, 5.08192245326, 6283.0758499914],
    [0.00000000008, 4.29677563134, 86457.98475793119],
    [0.00000000008, 0.67408017393, 163298.1294506908],
    [0.0000000001, 0.62119386097, 50593.84693486539],
    [0.00000000009, 1.40146144771, 102232.84870591838],
    [0.00000000009, 3.1578525798, 51646.11531805379],
    [0.00000000011, 0.28513183349, 65697.55772473979],
    [0.00000000007, 5.97407619661, 19202.75325164339],
    [0.00000000008, 2.97394176427, 62389.09182935939],
    [0.00000000007, 4.11871479807, 183724.7005431128],
    [0.00000000008, 0.30388003893, 77734.01845962799],
    [0.00000000007, 5.95249133637, 45290.65639321759],
    [0.00000000009, 5.92063606797, 71378.55953479178],
    [0.00000000007, 5.75484480252, 66941.04532641819],
    [0.00000000007, 2.47643408804, 131395.11544947958],
    [0.00000000007, 3.44316245778, 6885.14988993081],
    [0.00000000009, 3.52227734373, 467.9649903544],
    [0.00000000008, 5.87596527398, 97466.46267636596],
    [0.00000000007, 3.0442443793, 26301.2022370122],
    [0.00000000009, 0.31574789134, 25455.119402261],
    [0.00000000007, 0.44889002635, 636.9962720242],
    [0.00000000007, 0.37541341838, 1795.258443721],
    [0.00000000007, 3.24623127144, 2221.856634597],
    [0.00000000007, 2.30867346309, 51109.31080595839],
    [0.00000000007, 3.35263772614, 34082.4315835984],
    [0.00000000007, 4.30113029327, 132658.27281205778],
    [0.00000000007, 1.8246117022, 51123.53789995999],
    [0.00000000006, 4.50480421034, 133767.65136415116],
    [0.00000000007, 5.18864964558, 153084.84390447979],
    [0.00000000006, 0.3051084459, 77623.81213840858],
    [0.00000000009, 2.9197879093, 85502.38501632259],
    [0.00000000008, 3.27039913491, 61279.713277266],
    [0.00000000006, 5.71495273335, 3178.1457905676],
    [0.00000000008, 4.45881946181, 35472.7441496494],
    [0.00000000006, 5.5059994175, 24609.0365675098],
    [0.00000000006, 0.96321410652, 114.43928868521],
    [0.00000000006, 5.81313880472, 123554.36581794015],
    [0.00000000006, 2.23468940921, 1485.9801210652],
    [0.00000000006, 0.93652441364, 8989.46770543239],
    [0.00000000008, 2.20170679539, 68050.42387851159],
    [0.00000000006, 0.17467420005, 949.1756089698],
    [0.00000000006, 3.20332665741, 143961.2671494624],
    [0.00000000006, 3.61989083728, 189386.03259226496],
    [0.00000000006, 0.53189711855, 138319.60486120995],
    [0.00000000006, 0.6552721763, 80174.90890793978],
    [0.00000000007, 1.22777067151, 22747.2907148744],
    [0.00000000006, 0.84150032602, 45494.58142974879],
    [0.00000000006, 3.59135763334, 2703.6161546756],
    [0.00000000006, 0.64702009281, 54087.0057663656],
    [0.00000000005, 5.83570922807, 103.0927742186],
    [0.00000000005, 5.36923121584, 199599.31813847594],
    [0.00000000006, 6.10411028108, 51535.90899683439],
    [0.00000000005, 1.70586132356, 92741.06060792258],
    [0.00000000005, 3.14984917992, 143980.93691036216],
    [0.00000000005, 0.89737436889, 61165.27398858079],
    [0.00000000005, 0.79289249176, 55618.3812281138],
    [0.00000000005, 4.43350070902, 74.7815985673],
    [0.00000000006, 0.86270719089, 87253.17713015496],
    [0.00000000004, 2.75056199105, 23976.2528281966],
    [0.00000000005, 5.49397492457, 157483.01859105378],
    [0.00000000004, 1.94667995779, 179172.74704605396],
    [0.00000000005, 6.07223522176, 154938.34595416137],
    [0.00000000004, 5.05584269314, 24925.4284371664],
    [0.00000000004, 1.33757400759, 25131.61398560359],
    [0.00000000004, 3.44025953347, 162188.75089859738],
    [0.00000000006, 5.6476976703, 105307.21230790539],
    [0.00000000004, 4.68202624348, 178063.3684939606],
    [0.00000000004, 4.35362432758, 2008.557539159],
    [0.00000000005, 1.68474570266, 118828.96374949679],
    [0.00000000004, 0.68212218471, 19406.6782881746],
    [0.00000000004, 3.60570837934, 32132.1317229496],
    [0.00000000004, 5.8856403516, 103285.11708910679],
    [0.00000000004, 0.92205407043, 35077.37084700659],
    [0.00000000005, 0.81504871101, 113341.08027172917],
    [0.00000000004, 2.23768712401, 181555.94006083018],
    [0.00000000004, 3.27758602687, 71980.63357473118],
    [0.00000000004, 6.19884989608, 68241.8721446232],
    [0.00000000004, 2.12692673105, 52705.49724824299],
    [0.00000000004, 0.54262714944, 25440.89230825939],
    [0.00000000005, 3.37520726681, 142871.55835826878],
    [0.00000000004, 3.15390056355, 103821.92160120218],
    [0.00000000005, 2.00729221123, 23962.02573419499],
    [0.00000000005, 0.63662819611, 27999.1026247914],
    [0.00000000004, 5.87135489936, 163766.0944410452],
    [0.00000000004, 5.92356063138, 193937.9860893238],
    [0.00000000004, 5.75245592611, 25565.3257234804],
    [0.00000000004, 6.2476085418, 42153.969003049],
];

const H2: &[Term] = &[
    [0.0000797412, PI, 0.0],
    [0.00000000698, 0.17787712508, 1109.3785520934],
    [0.00000000277, 2.69491825454, 1589.0728952838],
    [0.00000000269, 1.63755482476, 1059.3819301892],
    [0.00000000136, 5.38623180793, 4551.9534970588],
    [0.00000000098, 5.51997029182, 3442.5749449654],
    [0.00000000085, 2.64460949637, 6770.7106012456],
    [0.00000000087, 0.64036742904, 639.897286314],
    [0.00000000099, 3.58576171326, 955.5997416086],
    [0.00000000081, 0.09653809939, 2218.7571041868],
    [0.0000000006, 1.70619338602, 9103.9069941176],
    [0.00000000055, 3.3784446073, 2118.7638603784],
    [0.00000000064, 2.26072239167, 529.6909650946],
    [0.00000000054, 5.20907758602, 11322.6640983044],
    [0.00000000047, 4.16389294632, 14765.2390432698],
    [0.00000000043, 1.37706009438, 16983.9961474566],
    [0.00000000032, 0.14522859952, 24498.8302462904],
    [0.00000000028, 5.95269876586, 213.299095438],
    [0.00000000028, 5.11991151195, 12432.0426503978],
    [0.00000000026, 2.22422724606, 426.598190876],
    [0.00000000025, 5.93734318516, 853.196381752],
    [0.00000000024, 3.85398772996, 22645.32819660879],
    [0.00000000018, 2.57419638655, 32858.61374281979],
    [0.00000000019, 0.08223861905, 27197.2816936676],
    [0.00000000017, 2.9126594091, 24978.5245894808],
    [0.00000000019, 0.26550030469, 20426.571092422],
    [0.0000000002, 0.68297345796, 7238.6755916],
    [0.00000000015, 0.45096176273, 19317.1925403286],
    [0.00000000014, 5.35048876981, 30639.856638633],
    [0.00000000014, 5.63522211371, 2333.196392872],
    [0.00000000014, 3.02290864856, 5661.3320491522],
    [0.00000000011, 5.62648165835, 23969.1392811958],
    [0.00000000011, 3.72127707908, 21535.9496445154],
    [0.0000000001, 0.38657062919, 25028.521211385],
    [0.0000000001, 1.23610180109, 43071.8992890308],
    [0.00000000009, 4.00561469572, 12566.1516999828],
    [0.00000000008, 4.97502501586, 38519.945791972],
    [0.00000000009, 2.53515008986, 7880.08915333899],
    [0.00000000009, 6.27239244291, 28306.66024576099],
    [0.00000000008, 4.93757207953, 37410.5672398786],
    [0.00000000009, 4.3104332911, 13655.8604911764],
    [0.00000000008, 1.82829366955, 7994.5284420242],
    [0.00000000006, 3.64046466066, 48733.23133818299],
    [0.00000000008, 1.26822863465, 18093.37469954999],
    [0.00000000006, 6.15827258514, 53285.1848352418],
    [0.00000000005, 6.18644490248, 54394.56338733519],
    [0.00000000004, 6.27430920283, 3328.13565628019],
    [0.00000000005, 1.20431563899, 44181.27784112419],
    [0.00000000004, 2.48166983749, 25448.00585526019],
    [0.00000000005, 0.41757092528, 25558.2121764796],
    [0.00000000004, 4.08990105198, 2648.454825473],
    [0.00000000004, 1.71818283794, 35191.8101356918],
    [0.00000000004, 4.18797924248, 40853.142184844],
    [0.00000000004, 2.2842984764, 58946.51688439399],
    [0.00000000004, 4.85211083171, 64607.84893354619],
    [0.00000000004, 5.32887096884, 6283.0758499914],
];

const H3: &[Term] = &[
    [0.00000030459, PI, 0.0],
];

const H4: &[Term] = &[
    [0.00000000812, 0.0, 0.0],
];

const H5: &[Term] = &[
    [0.00000000008, PI, 0.0],
];

const Q0: &[Term] = &[
    [0.04061563384, 0.0, 0.0],
    [0.0000003969, 0.46319933125, 1059.3819301892],
    [0.00000011437, 0.98979614735, 1109.3785520934],
    [0.00000006867, 4.66099042465, 4551.9534970588],
    [0.00000007248, 5.0107862459, 529.6909650946],
    [0.00000004756, 1.22186226201, 426.598190876],
    [0.00000004066, 1.09378933026, 1589.0728952838],
    [0.00000004032, 5.79081109021, 955.5997416086],
    [0.00000002728, 5.91916592557, 20426.571092422],
    [0.00000002319, 1.91224883905, 52175.8062831484],
    [0.00000002205, 2.63672635486, 12566.1516999828],
    [0.00000002174, 2.3442818154, 26087.9031415742],
    [0.0000000213, 0.17023775509, 5661.3320491522],
    [0.00000001592, 3.22657883788, 7238.6755916],
    [0.00000001618, 5.52260780314, 15874.6175953632],
    [0.00000001293, 6.16033471396, 31749.2351907264],
    [0.00000001241, 6.09453679126, 11322.6640983044],
    [0.00000001209, 0.89083049314, 36301.18868778519],
    [0.00000001251, 3.41180887612, 14765.2390432698],
    [0.00000001228, 1.72415655869, 10213.285546211],
    [0.00000001295, 1.60246076494, 7.1135470008],
    [0.00000000884, 3.12047617225, 13521.7514415914],
    [0.00000000874, 1.26469652742, 21535.9496445154],
    [0.00000000834, 4.42247320883, 213.299095438],
    [0.00000000973, 0.95384068148, 19804.8272915828],
    [0.0000000077, 5.1674072211, 51116.4243529592],
    [0.00000000726, 3.5294955015, 41962.5207369374],
    [0.00000000667, 3.14534810379, 39609.6545831656],
    [0.00000000702, 5.04631088557, 25028.521211385],
    [0.00000000726, 4.65702424027, 30639.856638633],
    [0.00000000593, 4.71064649496, 3442.5749449654],
    [0.00000000546, 0.41798617808, 639.897286314],
    [0.00000000674, 0.91714043252, 9103.9069941176],
    [0.00000000679, 3.48360247682, 6770.7106012456],
    [0.00000000488, 5.33477902521, 32370.9789915656],
    [0.0000000052, 0.91841665021, 47623.8527860896],
    [0.00000000453, 3.29951227221, 68050.42387851159],
    [0.00000000464, 2.42817764713, 37410.5672398786],
    [0.00000000405, 4.43416558543, 57837.1383323006],
    [0.00000000443, 2.27900456093, 16983.9961474566],
    [0.00000000405, 1.51076607019, 6283.0758499914],
    [0.00000000421, 5.87818141233, 46514.4742339962],
    [0.00000000322, 1.73388568765, 2118.7638603784],
    [0.0000000032, 0.04347790549, 18849.2275499742],
    [0.00000000306, 0.91798525705, 2218.7571041868],
    [0.00000000312, 0.35939443693, 27147.28507176339],
    [0.00000000278, 5.78399276106, 33326.5787331742],
    [0.00000000254, 3.83832886526, 149.5631971346],
    [0.00000000285, 2.16786413483, 24978.5245894808],
    [0.00000000224, 3.50258833493, 1066.49547719],
    [0.00000000224, 5.52429770013, 73711.75592766379],
    [0.00000000253, 2.00385103633, 25558.2121764796],
    [0.00000000242, 3.58877201, 53285.1848352418],
    [0.00000000218, 0.61995084067, 1052.2683831884],
    [0.00000000191, 4.51382924167, 45892.73043315699],
    [0.00000000187, 4.05284239125, 26617.5941066688],
    [0.00000000189, 4.84597600692, 78263.70942472259],
    [0.00000000182, 2.6403788138, 38654.05484155699],
    [0.0000000018, 5.75244175963, 59414.4818747484],
    [0.00000000188, 4.59489064366, 83925.0414738748],
    [0.00000000215, 1.90885855359, 63498.47038145279],
    [0.00000000174, 1.41709732595, 27197.2816936676],
    [0.00000000171, 3.69927186874, 76.2660712756],
    [0.00000000157, 4.32414649259, 71980.63357473118],
    [0.00000000147, 6.05043653207, 27043.5028831828],
    [0.00000000168, 1.05647537099, 5327.4761083828],
    [0.00000000166, 3.41718745726, 40853.142184844],
    [0.00000000129, 5.97212132913, 12432.0426503978],
    [0.00000000147, 0.86764276672, 62389.09182935939],
    [0.00000000117, 0.37824300055, 89586.37352302698],
    [0.00000000152, 5.70032757953, 24498.8302462904],
    [0.0000000012, 5.96327967601, 19317.1925403286],
    [0.00000000118, 3.63035432927, 32858.61374281979],
    [0.00000000114, 4.33805501479, 50586.73338786459],
    [0.00000000106, 2.16934963607, 53131.406024757],
    [0.00000000122, 4.73619318699, 69159.80243060499],
    [0.00000000131, 0.37652769159, 65697.55772473979],
    [0.00000000136, 4.75873724721, 22645.32819660879],
    [0.00000000097, 1.93746927806, 77204.32749453338],
    [0.00000000096, 2.21936241134, 20760.4270331914],
    [0.00000000079, 5.26687172819, 6681.2248533996],
    [0.00000000093, 2.82980307315, 79373.087976816],
    [0.00000000084, 3.93069992254, 632.7837393132],
    [0.00000000083, 4.68134048266, 56727.7597802072],
    [0.00000000068, 1.10090322999, 433.7117378768],
    [0.00000000072, 5.94566916919, 99799.65906923798],
    [0.00000000065, 0.93193180767, 35191.8101356918],
    [0.00000000062, 0.77906778715, 51646.11531805379],
    [0.00000000056, 3.47691360342, 13655.8604911764],
    [0.00000000058, 1.54575735002, 105460.99111839019],
    [0.00000000054, 3.87315647722, 43071.8992890308],
    [0.00000000066, 3.44319577176, 103.0927742186],
    [0.00000000052, 4.00531820922, 419.4846438752],
    [0.00000000051, 2.33755750823, 52705.49724824299],
    [0.00000000049, 0.88127900672, 27676.976036858],
    [0.00000000047, 5.91318869856, 853.196381752],
    [0.00000000051, 2.38340357286, 76674.63652943878],
    [0.00000000047, 6.17790604458, 1692.1656695024],
    [0.00000000047, 5.477564819, 77734.01845962799],
    [0.00000000059, 5.86246731189, 85034.42002596818],
    [0.00000000046, 2.06303803886, 79219.3091663312],
    [0.0000000005, 6.26299811192, 94138.32702008578],
    [0.0000000006, 2.94467197716, 85502.38501632259],
    [0.00000000046, 5.68876010384, 58946.51688439399],
    [0.00000000044, 3.70591568639, 95247.70557217918],
    [0.00000000041, 0.88062305362, 91785.46086631398],
    [0.00000000039, 4.8281194377, 72936.23331633979],
    [0.00000000039, 5.35064391506, 3340.6124266998],
    [0.00000000049, 3.6271070207, 522.5774180938],
    [0.00000000048, 6.06234996684, 38519.945791972],
    [0.00000000041, 0.95690042572, 28306.66024576099],
    [0.00000000036, 5.1335498835, 48733.23133818299],
    [0.00000000037, 4.40856968316, 51749.20809227239],
    [0.00000000044, 3.75086305976, 25132.3033999656],
    [0.00000000037, 2.19033841671, 51066.427731055],
    [0.0000000004, 4.77951252921, 14477.3511832],
    [0.00000000038, 1.29038339275, 110012.94461544899],
    [0.00000000036, 4.79037061531, 2333.196392872],
    [0.00000000032, 0.99163617691, 7994.5284420242],
    [0.00000000031, 4.10936139262, 1596.1864422846],
    [0.0000000003, 2.17488998714, 18093.37469954999],
    [0.00000000033, 5.45128514995, 23969.1392811958],
    [0.00000000037, 0.66744037814, 74.7815985673],
    [0.00000000029, 1.06403902542, 98068.53671630539],
    [0.00000000029, 3.40341881474, 7880.08915333899],
    [0.00000000033, 0.76733237487, 74821.13447975718],
    [0.00000000031, 5.48559861459, 58458.88213313979],
    [0.00000000029, 5.24745218131, 1162.4747044078],
    [0.00000000028, 6.2241776911, 224.3447957019],
    [0.00000000034, 1.75893061175, 104351.61256629678],
    [0.00000000026, 4.72979408587, 29530.4780865396],
    [0.00000000036, 1.27741224931, 316.3918696566],
    [0.00000000035, 4.26858197105, 25661.3049506982],
    [0.00000000027, 2.73561797955, 121335.60871375339],
    [0.0000000003, 0.06180842968, 1581.959348283],
    [0.00000000023, 4.85736583535, 956.2891559706],
    [0.00000000023, 2.37867506912, 2648.454825473],
    [0.00000000023, 4.60560157716, 111122.32316754239],
    [0.00000000022, 4.96572851276, 40565.2543247742],
    [0.00000000023, 6.06975564895, 72602.37737557039],
    [0.00000000028, 0.67485522472, 100909.03762133139],
    [0.00000000024, 2.58173655324, 125887.56221081219],
    [0.00000000026, 2.83834941495, 46848.3301747656],
    [0.00000000025, 1.1595486966, 115674.27666460119],
    [0.00000000025, 5.55452957226, 105307.21230790539],
    [0.00000000018, 3.31278415511, 1375.7737998458],
    [0.00000000021, 2.01930581393, 90695.75207512038],
    [0.00000000018, 3.64107324346, 50057.04242277],
    [0.00000000017, 3.47501432105, 66941.04532641819],
    [0.00000000019, 1.13566896914, 54394.56338733519],
    [0.00000000021, 6.00705854688, 10021.8372800994],
    [0.00000000019, 4.33089592972, 1478.8665740644],
    [0.00000000015, 5.98676883965, 45405.0956819028],
    [0.00000000017, 2.24124837799, 44181.27784112419],
    [0.00000000017, 0.56779919591, 206.1855484372],
    [0.0000000002, 0.22653114658, 44937.1306915484],
    [0.00000000015, 3.64563201193, 1911.1994832172],
    [0.00000000014, 1.19988583678, 92741.06060792258],
    [0.00000000014, 4.77627158565, 103292.23063610759],
    [0.00000000017, 1.07016709186, 8194.2753332086],
    [0.00000000015, 1.18393056544, 26514.5013324502],
    [0.00000000018, 3.55360907917, 110.2063212194],
    [0.00000000015, 4.76346998099, 11610.5519583742],
    [0.00000000013, 3.81916396016, 117873.36400788819],
    [0.00000000012, 3.43849680499, 33967.99229491319],
    [0.00000000012, 5.57647827285, 126996.94076290558],
    [0.00000000011, 0.42819224103, 45494.58142974879],
    [0.00000000011, 3.09014521573, 53235.18821333759],
    [0.00000000013, 0.68660197148, 64607.84893354619],
    [0.00000000011, 0.68847820076, 19406.6782881746],
    [0.00000000011, 2.24492573263, 23869.1460373874],
    [0.00000000013, 1.72819999985, 116783.65521669458],
    [0.00000000011, 4.60675359443, 99024.13645791399],
    [0.00000000011, 5.51688575127, 102762.53967101299],
    [0.00000000011, 3.94596709201, 137210.22630911658],
    [0.00000000011, 2.30995962591, 103821.92160120218],
    [0.0000000001, 0.30453487224, 647.0108333148],
    [0.00000000012, 3.225052035, 106570.36967048359],
    [0.00000000012, 2.70869761299, 22747.2907148744],
    [0.00000000013, 1.70714411916, 14.2270940016],
    [0.00000000013, 3.8961019079, 141762.17980617538],
    [0.00000000011, 1.72851258314, 76144.94556434419],
    [0.00000000009, 2.92717531254, 131548.89425996438],
    [0.00000000009, 0.54515641535, 2221.856634597],
    [0.00000000009, 0.70352627078, 742.9900605326],
    [0.0000000001, 5.2062257463, 25448.00585526019],
    [0.0000000001, 3.93323771539, 111590.2881578968],
    [0.00000000009, 1.20049152421, 34282.1784747828],
    [0.00000000008, 0.97364247908, 61279.713277266],
    [0.00000000008, 4.65938281035, 23754.70674870219],
    [0.0000000001, 3.17755180926, 120226.23016165999],
    [0.00000000008, 2.97186645019, 220.4126424388],
    [0.00000000008, 3.39090251815, 29428.515568274],
    [0.00000000007, 5.37370054857, 78793.40038981718],
    [0.00000000009, 2.68761623783, 323.5054166574],
    [0.00000000008, 2.60910238161, 80482.46652890938],
    [0.00000000007, 2.59454418317, 70269.18098269838],
    [0.00000000007, 0.00709766843, 66653.15746634839],
    [0.00000000009, 1.9018481708, 125112.03959948818],
    [0.00000000009, 4.41175004266, 136100.84775702318],
    [0.00000000007, 5.1442038129, 735.8765135318],
    [0.00000000006, 2.97886516352, 38.1330356378],
    [0.00000000008, 0.83503991004, 3328.13565628019],
    [0.00000000008, 3.55235488584, 60055.89543648739],
    [0.00000000007, 1.9076685951, 16066.0658614748],
    [0.00000000006, 1.49047080221, 60370.08161635699],
    [0.00000000006, 3.50113992874, 39743.7636327506],
    [0.00000000006, 0.33481817942, 142871.55835826878],
    [0.00000000006, 5.24905327699, 51535.90899683439],
    [0.00000000006, 4.71266943386, 49842.60989027639],
    [0.00000000006, 4.39997024151, 122444.98726584678],
    [0.00000000005, 4.17647590405, 96357.08412427259],
    [0.00000000006, 2.72959805691, 132658.27281205778],
    [0.00000000006, 4.1681183568, 124156.43985787958],
    [0.00000000006, 1.18109640667, 31415.379249957],
    [0.00000000005, 1.38558152493, 28206.6670019526],
    [0.00000000006, 5.88779917935, 13541.42120249119],
    [0.00000000007, 5.65880187566, 151975.46535238638],
    [0.00000000005, 1.15177761031, 77837.11123384659],
    [0.00000000005, 4.85955297207, 82815.66292178139],
    [0.00000000006, 4.01714951419, 949.1756089698],
    [0.00000000005, 1.36047908675, 467.9649903544],
    [0.00000000005, 3.85293622279, 112545.88789950538],
    [0.00000000006, 5.25236696254, 157636.79740153858],
    [0.00000000006, 1.44052199743, 12725.453434775],
    [0.00000000005, 4.79788371981, 147423.51185532758],
    [0.00000000005, 0.85777938507, 11.0457002639],
    [0.00000000005, 0.31106557139, 137678.191299471],
    [0.00000000005, 4.93073462199, 23439.44831610119],
    [0.00000000004, 0.50773779847, 13362.4497067992],
    [0.00000000005, 0.89280863578, 1795.258443721],
    [0.00000000004, 4.76121601054, 32769.1279949738],
    [0.00000000005, 5.78955451165, 42153.969003049],
    [0.00000000005, 6.04375086361, 18207.81398823521],
    [0.00000000004, 0.33932031933, 2111.6503133776],
    [0.00000000004, 1.61853649731, 88476.99497093359],
    [0.00000000004, 5.18332075332, 153084.84390447979],
    [0.00000000004, 1.13275226744, 536.8045120954],
    [0.00000000005, 4.76622695264, 130439.51570787099],
    [0.00000000004, 5.61088014356, 1485.9801210652],
    [0.00000000004, 2.15343615292, 51109.31080595839],
    [0.00000000004, 5.03978822658, 51123.53789995999],
    [0.00000000004, 3.70780594414, 19.66976089979],
    [0.00000000004, 5.54019827231, 112231.70171963578],
    [0.00000000005, 2.09271494759, 25874.6040461362],
    [0.00000000004, 5.92005712409, 39629.32434406539],
    [0.00000000004, 1.76857972555, 148.0787244263],
    [0.00000000004, 2.76172520488, 151.0476698429],
    [0.00000000004, 3.74527545853, 64741.95798313119],
];

const Q1: &[Term] = &[
    [0.00065433117, 0.0, 0.0],
    [0.00000001195, 2.07670556346, 1059.3819301892],
    [0.0000000052, 4.62766248273, 529.6909650946],
    [0.00000000279, 0.60548217633, 4551.9534970588],
    [0.00000000237, 2.21990127687, 5661.3320491522],
    [0.00000000288, 4.01462557383, 1109.3785520934],
    [0.0000000018, 5.51948307727, 7.1135470008],
    [0.00000000174, 3.3548024634, 26087.9031415742],
    [0.00000000146, 0.57761491053, 1589.0728952838],
    [0.00000000183, 3.30303818733, 426.598190876],
    [0.00000000145, 1.21638637206, 213.299095438],
    [0.00000000109, 2.23039615633, 10213.285546211],
    [0.00000000106, 4.70385778803, 955.5997416086],
    [0.00000000102, 4.13769584396, 12566.1516999828],
    [0.00000000131, 0.25963719401, 6283.0758499914],
    [0.00000000086, 1.62231161117, 7238.6755916],
    [0.00000000082, 2.06475320389, 20426.571092422],
    [0.00000000071, 2.28320018222, 1052.2683831884],
    [0.00000000084, 3.9434078982, 11322.6640983044],
    [0.0000000006, 1.76395198367, 1066.49547719],
    [0.00000000063, 4.29659904652, 639.897286314],
    [0.00000000051, 3.21556352317, 15874.6175953632],
    [0.00000000051, 3.90064004204, 52175.8062831484],
    [0.00000000038, 3.56265489755, 21535.9496445154],
    [0.00000000037, 4.66574666634, 19804.8272915828],
    [0.00000000043, 2.83297084473, 3442.5749449654],
    [0.00000000034, 5.27677978437, 41962.5207369374],
    [0.00000000032, 3.38953264259, 36301.18868778519],
    [0.00000000031, 2.70131412344, 2218.7571041868],
    [0.00000000029, 1.44276947402, 39609.6545831656],
    [0.0000000003, 5.11160019998, 9103.9069941176],
    [0.00000000037, 5.54244534865, 13521.7514415914],
    [0.00000000028, 5.6774786291, 6770.7106012456],
    [0.0000000003, 0.6589254608, 14765.2390432698],
    [0.0000000003, 0.93591136073, 2118.7638603784],
    [0.00000000022, 0.45462532988, 32370.9789915656],
    [0.0000000002, 3.63479301742, 51116.4243529592],
    [0.00000000024, 0.39587697931, 57837.1383323006],
    [0.00000000019, 5.6914071831, 433.7117378768],
    [0.00000000024, 5.26896919677, 27197.2816936676],
    [0.00000000025, 4.01595556063, 31749.2351907264],
    [0.00000000019, 2.08231179789, 30639.856638633],
    [0.0000000002, 6.17547917011, 419.4846438752],
    [0.00000000017, 0.99336884731, 25028.521211385],
    [0.00000000018, 5.70585700272, 45892.73043315699],
    [0.00000000014, 5.69090921507, 16983.9961474566],
    [0.00000000013, 6.01459946234, 68050.42387851159],
    [0.00000000014, 0.13209500532, 24978.5245894808],
    [0.00000000012, 4.76619059995, 37410.5672398786],
    [0.00000000012, 3.33873360627, 46514.4742339962],
    [0.00000000014, 1.70267715044, 73711.75592766379],
    [0.0000000001, 4.22109746108, 27043.5028831828],
    [0.0000000001, 2.42328310223, 1596.1864422846],
    [0.00000000011, 5.51164922787, 522.5774180938],
    [0.00000000009, 4.15500855328, 59414.4818747484],
    [0.0000000001, 5.46925207412, 24498.8302462904],
    [0.0000000001, 0.24317596053, 43071.8992890308],
    [0.00000000008, 1.01365909148, 18849.2275499742],
    [0.00000000008, 5.76425865024, 149.5631971346],
    [0.00000000009, 1.40306173774, 40853.142184844],
    [0.00000000008, 2.11252996711, 1581.959348283],
    [0.00000000009, 3.63623228388, 853.196381752],
    [0.00000000009, 4.1066464181, 19317.1925403286],
    [0.00000000007, 5.98804180115, 47623.8527860896],
    [0.00000000007, 5.1310641068, 632.7837393132],
    [0.00000000009, 1.6086092424, 12432.0426503978],
    [0.00000000006, 0.95371505915, 32858.61374281979],
    [0.00000000006, 3.09639067243, 2333.196392872],
    [0.00000000006, 5.89106778383, 71980.63357473118],
    [0.00000000006, 1.70390654857, 13655.8604911764],
    [0.00000000006, 0.30578616762, 77204.32749453338],
    [0.00000000007, 2.98712279941, 89586.37352302698],
    [0.00000000005, 0.86549864525, 22645.32819660879],
    [0.00000000006, 1.61977517423, 51646.11531805379],
    [0.00000000005, 1.04401027312, 83925.0414738748],
    [0.00000000005, 4.72982198254, 62389.09182935939],
    [0.00000000004, 5.55025974346, 7994.5284420242],
    [0.00000000004, 5.34938730429, 76.2660712756],
    [0.00000000005, 5.36467075935, 35191.8101356918],
    [0.00000000005, 2.65961284551, 56727.7597802072],
    [0.00000000004, 4.05793886174, 3340.6124266998],
    [0.00000000004, 2.80027482099, 65697.55772473979],
    [0.00000000004, 4.97433689644, 50586.73338786459],
    [0.00000000004, 5.1346520627, 7880.08915333899],
    [0.00000000005, 1.4303388141, 58946.51688439399],
    [0.00000000005, 2.38945025214, 206.1855484372],
    [0.00000000004, 1.99442363755, 63498.47038145279],
    [0.00000000004, 3.61451356627, 79373.087976816],
    [0.00000000004, 5.73664975621, 53285.1848352418],
];

const Q2: &[Term] = &[
    [0.00001071215, PI, 0.0],
    [0.00000000019, 2.61398582704, 1059.3819301892],
    [0.00000000012, 1.79194943615, 1109.3785520934],
    [0.00000000012, 0.19682128986, 5661.3320491522],
    [0.00000000014, 2.14634912654, 529.6909650946],
    [0.00000000008, 3.18846006491, 4551.9534970588],
    [0.00000000007, 4.50650844259, 10213.285546211],
    [0.00000000006, 5.59476983671, 426.598190876],
    [0.00000000007, 6.04802515391, 15874.6175953632],
    [0.00000000004, 4.77980101228, 213.299095438],
    [0.00000000004, 2.48909458036, 955.5997416086],
];

const Q3: &[Term] = &[
    [0.00000022459, 0.0, 0.0],
];

const Q4: &[Term] = &[
    [0.00000000377, PI, 0.0],
];

const Q5: &[Term] = &[
    [0.00000000003, PI, 0.0],
];

const P0: &[Term] = &[
    [0.04563550461, 0.0, 0.0],
    [0.00000047057, 5.25384066589, 1059.3819301892],
    [0.00000020015, 2.26523219459, 1109.3785520934],
    [0.00000016082, 2.58117032683, 529.6909650946],
    [0.0000001292, 3.39158218652, 4551.9534970588],
    [0.00000013542, 4.38262325314, 5661.3320491522],
    [0.00000005706, 6.01810536191, 426.598190876],
    [0.00000006727, 6.25729051842, 10213.285546211],
    [0.00000004883, 5.87389382158, 1589.0728952838],
    [0.00000005269, 0.89630514741, 955.5997416086],
    [0.00000005029, 0.87312472614, 26087.9031415742],
    [0.00000005894, 2.7366902384, 15874.6175953632],
    [0.00000003743, 4.50771974889, 20426.571092422],
    [0.00000003755, 0.86729036768, 11322.6640983044],
    [0.00000002744, 1.18977122651, 12566.1516999828],
    [0.00000002464, 4.50697452531, 7238.6755916],
    [0.00000002581, 4.54450323804, 6283.0758499914],
    [0.00000002348, 0.35927013248, 52175.8062831484],
    [0.00000002652, 5.5095073276, 21535.9496445154],
    [0.00000002597, 4.05085283262, 31749.2351907264],
    [0.00000001857, 1.41858986327, 13521.7514415914],
    [0.00000001388, 3.8066036705, 25028.521211385],
    [0.00000001472, 5.71035645017, 36301.18868778519],
    [0.00000001794, 2.03781876663, 14765.2390432698],
    [0.00000001144, 2.09725405736, 41962.5207369374],
    [0.00000001156, 4.75950728164, 6770.7106012456],
    [0.00000000992, 5.84680216322, 9103.9069941176],
    [0.00000001178, 4.17370347976, 19804.8272915828],
    [0.00000000887, 3.37084903533, 3442.5749449654],
    [0.00000001038, 0.36768160907, 37410.5672398786],
    [0.00000001004, 3.42158156189, 16983.9961474566],
    [0.00000001076, 1.98828197132, 27197.2816936676],
    [0.00000001018, 5.19654552966, 47623.8527860896],
    [0.00000000759, 3.56828726048, 51116.4243529592],
    [0.00000000674, 5.63021982055, 7.1135470008],
    [0.00000000897, 3.208995114, 30639.856638633],
    [0.00000000661, 5.2189616495, 639.897286314],
    [0.00000000665, 1.07520852253, 39609.6545831656],
    [0.00000000551, 3.84708739789, 32370.9789915656],
    [0.0000000062, 1.09552661446, 213.299095438],
    [0.00000000487, 3.00398302165, 57837.1383323006],
    [0.00000000463, 2.24783809119, 2218.7571041868],
    [0.00000000458, 1.74776208524, 68050.42387851159],
    [0.00000000461, 1.51142444245, 53285.1848352418],
    [0.0000000039, 0.21543108737, 2118.7638603784],
    [0.00000000449, 3.11460999517, 43071.8992890308],
    [0.0000000047, 4.38213935724, 46514.4742339962],
    [0.00000000384, 3.9275473115, 33326.5787331742],
    [0.00000000371, 4.85995964375, 18849.2275499742],
    [0.00000000418, 0.03486028465, 63498.47038145279],
    [0.00000000373, 0.75224605677, 24978.5245894808],
    [0.00000000374, 4.57522217339, 32858.61374281979],
    [0.00000000352, 5.70788895298, 25558.2121764796],
    [0.00000000323, 0.78105923433, 27043.5028831828],
    [0.00000000317, 5.08273399104, 27147.28507176339],
    [0.00000000301, 2.356008103, 149.5631971346],
    [0.00000000279, 3.06746861875, 45892.73043315699],
    [0.00000000265, 2.01056888348, 1066.49547719],
    [0.00000000277, 5.93642842978, 22645.32819660879],
    [0.00000000259, 5.43801172477, 1052.2683831884],
    [0.00000000228, 3.99899526939, 73711.75592766379],
    [0.00000000217, 0.9642649185, 12432.0426503978],
    [0.00000000285, 2.58510725143, 24498.8302462904],
    [0.00000000216, 2.32956047978, 26617.5941066688],
    [0.00000000203, 2.21658782078, 76.2660712756],
    [0.00000000213, 2.6529140385, 69159.80243060499],
    [0.00000000192, 1.11603771634, 38654.05484155699],
    [0.00000000187, 3.24658192853, 78263.70942472259],
    [0.00000000208, 4.24558601897, 58946.51688439399],
    [0.00000000186, 3.03502172822, 83925.0414738748],
    [0.00000000198, 1.95350035219, 40853.142184844],
    [0.00000000179, 3.67668143344, 59414.4818747484],
    [0.00000000163, 4.56994028565, 19317.1925403286],
    [0.00000000173, 5.72747244538, 48733.23133818299],
    [0.00000000153, 2.75019704336, 71980.63357473118],
    [0.00000000174, 1.13100452943, 79373.087976816],
    [0.00000000207, 5.91291570937, 5327.4761083828],
    [0.00000000146, 3.49886710574, 20760.4270331914],
    [0.00000000157, 5.64011614549, 62389.09182935939],
    [0.00000000122, 0.82691397113, 38519.945791972],
    [0.00000000136, 5.14232718224, 65697.55772473979],
    [0.00000000122, 2.61089185184, 50586.73338786459],
    [0.00000000109, 5.0326532486, 89586.37352302698],
    [0.00000000115, 0.19612377607, 53131.406024757],
    [0.00000000101, 3.67861079328, 6681.2248533996],
    [0.00000000117, 1.23571360809, 632.7837393132],
    [0.00000000096, 0.35930124476, 77204.32749453338],
    [0.00000000099, 3.78844541264, 85034.42002596818],
    [0.00000000091, 2.34670412429, 3340.6124266998],
    [0.000000001, 5.37950991303, 74821.13447975718],
    [0.00000000087, 3.33520119757, 46848.3301747656],
    [0.00000000092, 3.18581654075, 56727.7597802072],
    [0.00000000081, 5.77779489327, 35191.8101356918],
    [0.0000000008, 5.89375603385, 433.7117378768],
    [0.00000000086, 0.59574252641, 64607.84893354619],
    [0.00000000093, 0.21928991193, 103.0927742186],
    [0.00000000078, 2.15384969279, 28306.66024576099],
    [0.00000000078, 2.09991769777, 13655.8604911764],
    [0.00000000072, 2.19826290184, 95247.70557217918],
    [0.00000000072, 5.30106376127, 51646.11531805379],
    [0.00000000071, 4.38926126382, 99799.65906923798],
    [0.00000000062, 1.99813558078, 54394.56338733519],
    [0.00000000064, 3.03022076032, 25661.3049506982],
    [0.00000000059, 4.37325652869, 853.196381752],
    [0.00000000064, 3.6061167204, 74.7815985673],
    [0.00000000055, 4.68203386785, 1692.1656695024],
    [0.00000000051, 3.44943194888, 18093.37469954999],
    [0.0000000005, 0.75056052164, 52705.49724824299],
    [0.0000000005, 5.60642559075, 27676.976036858],
    [0.00000000053, 3.67642349769, 419.4846438752],
    [0.00000000049, 0.23108800141, 90695.75207512038],
    [0.0000000005, 0.77759500402, 76674.63652943878],
    [0.00000000045, 3.88508943347, 77734.01845962799],
    [0.00000000051, 6.10281479995, 105460.99111839019],
    [0.00000000049, 4.66354594832, 94138.32702008578],
    [0.00000000061, 4.42133938932, 316.3918696566],
    [0.00000000048, 6.24355060892, 79219.3091663312],
    [0.00000000045, 4.91462198188, 100909.03762133139],
    [0.00000000045, 5.9103874668, 7994.5284420242],
    [0.00000000058, 1.33565715419, 85502.38501632259],
    [0.00000000043, 0.71867003233, 51066.427731055],
    [0.00000000044, 1.74647289567, 80482.46652890938],
    [0.00000000045, 1.62523157838, 23969.1392811958],
    [0.00000000041, 2.6112958883, 1596.1864422846],
    [0.00000000051, 3.43591836514, 2333.196392872],
    [0.00000000044, 4.72569675876, 7880.08915333899],
    [0.0000000004, 5.5944747704, 91785.46086631398],
    [0.00000000039, 3.34043533805, 44181.27784112419],
    [0.00000000054, 6.13956861082, 14477.3511832],
    [0.00000000042, 3.65530863653, 206.1855484372],
    [0.0000000005, 2.27088250297, 25132.3033999656],
    [0.00000000049, 0.60977107629, 522.5774180938],
    [0.0000000004, 6.09659038696, 40565.2543247742],
    [0.00000000036, 2.8211318265, 51749.20809227239],
    [0.00000000034, 3.31276074064, 29530.4780865396],
    [0.00000000033, 4.74511443505, 224.3447957019],
    [0.00000000041, 5.19168584895, 536.8045120954],
    [0.00000000038, 5.98774389957, 110012.94461544899],
    [0.00000000033, 3.16735461122, 70269.18098269838],
    [0.00000000037, 2.75540436849, 72936.23331633979],
    [0.0000000003, 3.23415738093, 111122.32316754239],
    [0.00000000032, 3.95716391216, 58458.88213313979],
    [0.00000000028, 5.76579052571, 98068.53671630539],
    [0.00000000028, 0.84200526197, 2648.454825473],
    [0.00000000033, 0.18738410702, 104351.61256629678],
    [0.00000000036, 4.8609471526, 1581.959348283],
    [0.00000000027, 3.36353049627, 956.2891559706],
    [0.00000000027, 5.30972053032, 19406.6782881746],
    [0.00000000027, 5.89004045678, 66653.15746634839],
    [0.00000000028, 3.44141033018, 1162.4747044078],
    [0.00000000025, 4.57017323732, 72602.37737557039],
    [0.00000000024, 1.36441691756, 106570.36967048359],
    [0.00000000023, 4.64764135923, 33967.99229491319],
    [0.00000000023, 3.10106476049, 110.2063212194],
    [0.00000000022, 2.89614740815, 96357.08412427259],
    [0.00000000021, 4.52459015355, 60055.89543648739],
    [0.00000000021, 1.81867110432, 1375.7737998458],
    [0.00000000021, 6.02801916506, 116783.65521669458],
    [0.00000000027, 5.88623089572, 115674.27666460119],
    [0.00000000024, 1.00390290469, 125887.56221081219],
    [0.00000000021, 4.2616854875, 16066.0658614748],
    [0.00000000021, 2.46899944073, 8194.2753332086],
    [0.00000000026, 4.44809394504, 10021.8372800994],
    [0.00000000023, 0.91730930986, 121335.60871375339],
    [0.00000000019, 1.98106177081, 66941.04532641819],
    [0.00000000018, 5.06712618811, 1911.1994832172],
    [0.00000000023, 3.88909160022, 105307.21230790539],
    [0.00000000018, 4.536469363, 45405.0956819028],
    [0.00000000018, 4.3347710451, 86143.79857806159],
    [0.00000000022, 2.83631860899, 1478.8665740644],
    [0.00000000018, 3.31722545574, 11610.5519583742],
    [0.00000000022, 4.98988990705, 44937.1306915484],
    [0.00000000016, 5.90583871221, 26514.5013324502],
    [0.00000000014, 3.20243624572, 103292.23063610759],
    [0.00000000014, 0.84388711585, 23869.1460373874],
    [0.00000000013, 4.24038578367, 126996.94076290558],
    [0.00000000012, 5.10729489912, 647.0108333148],
    [0.00000000012, 5.84318256529, 49842.60989027639],
    [0.00000000013, 5.93313970592, 23754.70674870219],
    [0.00000000012, 2.24159008952, 117873.36400788819],
    [0.00000000012, 5.70664504857, 75930.51303185058],
    [0.00000000015, 6.12799026963, 22747.2907148744],
    [0.00000000014, 2.40805044851, 60370.08161635699],
    [0.00000000011, 2.49391068278, 122444.98726584678],
    [0.00000000011, 4.04411917863, 112231.70171963578],
    [0.00000000016, 0.29275029365, 467.9649903544],
    [0.00000000011, 4.91984798521, 45494.58142974879],
    [0.00000000011, 1.52858051329, 53235.18821333759],
    [0.00000000011, 5.32373617016, 2221.856634597],
    [0.00000000011, 1.28375167614, 131548.89425996438],
    [0.00000000011, 5.48041390358, 742.9900605326],
    [0.0000000001, 3.92919603973, 102762.53967101299],
    [0.00000000014, 2.47735255962, 34282.1784747828],
    [0.00000000011, 0.72702023553, 103821.92160120218],
    [0.00000000012, 2.47532426379, 99024.13645791399],
    [0.00000000011, 1.24305969448, 50057.04242277],
    [0.00000000013, 2.32680666906, 141762.17980617538],
    [0.00000000014, 0.88977507634, 220.4126424388],
    [0.00000000012, 2.18134887696, 3328.13565628019],
    [0.00000000009, 5.50036134124, 102018.41617342478],
    [0.0000000001, 0.11574243061, 76144.94556434419],
    [0.00000000011, 3.36404839588, 12725.453434775],
    [0.00000000009, 0.16331459153, 949.1756089698],
    [0.00000000012, 5.31372737696, 92741.06060792258],
    [0.00000000009, 0.84187828965, 132658.27281205778],
    [0.00000000009, 1.75097345725, 29428.515568274],
    [0.00000000009, 5.78059390122, 61279.713277266],
    [0.0000000001, 2.36705001902, 111590.2881578968],
    [0.00000000009, 2.1632254191, 86457.98475793119],
    [0.00000000009, 0.79148224555, 38.1330356378],
    [0.0000000001, 1.1771169297, 323.5054166574],
    [0.0000000001, 1.60404789311, 120226.23016165999],
    [0.00000000008, 5.02427796139, 19.66976089979],
    [0.0000000001, 2.03182350877, 137210.22630911658],
    [0.00000000008, 5.99252125158, 14.2270940016],
    [0.00000000007, 0.7926425726, 25021.4076643842],
    [0.00000000007, 3.79327637541, 78793.40038981718],
    [0.00000000009, 0.19877163998, 125112.03959948818],
    [0.00000000007, 0.7533126926, 65717.22748563958],
    [0.00000000007, 2.06864900547, 39743.7636327506],
    [0.00000000007, 3.678981672, 25035.6347583858],
    [0.00000000009, 0.9209052218, 13541.42120249119],
    [0.00000000007, 0.60361462501, 91805.13062721379],
    [0.00000000007, 3.80901951617, 25448.00585526019],
    [0.00000000009, 2.83504169989, 136100.84775702318],
    [0.00000000009, 3.32222235271, 153.7788104848],
    [0.00000000007, 2.00456442155, 735.8765135318],
    [0.00000000007, 5.97931880852, 31415.379249957],
    [0.00000000007, 0.8544396896, 39629.32434406539],
    [0.00000000006, 3.9748316834, 42153.969003049],
    [0.00000000006, 2.98592274119, 147423.51185532758],
    [0.00000000006, 5.18946892258, 128106.31931499895],
    [0.00000000006, 0.80602716314, 23439.44831610119],
    [0.00000000005, 5.45832419139, 11.0457002639],
    [0.00000000005, 3.61700202489, 138319.60486120995],
    [0.00000000006, 5.44695550736, 25874.6040461362],
    [0.00000000005, 3.36275945186, 82815.66292178139],
    [0.00000000005, 5.2318708375, 13362.4497067992],
    [0.00000000006, 2.58959889511, 124156.43985787958],
    [0.00000000005, 6.11205699028, 28206.6670019526],
    [0.00000000005, 5.22502225079, 142871.55835826878],
    [0.00000000006, 4.65563562507, 18207.81398823521],
    [0.00000000005, 3.65383337818, 51535.90899683439],
    [0.00000000005, 0.38073855065, 117893.03376878797],
    [0.00000000007, 4.08314217133, 151975.46535238638],
    [0.00000000007, 3.69039467417, 157636.79740153858],
    [0.00000000005, 5.85615071007, 77837.11123384659],
    [0.00000000005, 5.12374919414, 2111.6503133776],
    [0.00000000005, 2.50587598864, 9384.8410080752],
    [0.00000000005, 0.09674442771, 88476.99497093359],
    [0.00000000005, 4.10484220145, 1485.9801210652],
    [0.00000000005, 3.15382911394, 32769.1279949738],
    [0.00000000005, 5.02260095631, 137678.191299471],
    [0.00000000004, 0.28882552849, 148.0787244263],
    [0.00000000004, 1.28197167759, 151.0476698429],
    [0.00000000004, 1.94468427715, 81591.84508100279],
    [0.00000000004, 3.22976981546, 2125.8774073792],
    [0.00000000004, 1.91891645984, 148532.89040742096],
    [0.00000000004, 4.40552449143, 2008.557539159],
    [0.00000000005, 5.00064860967, 80174.90890793978],
    [0.00000000005, 3.18762880117, 130439.51570787099],
    [0.00000000004, 5.10515343382, 27999.1026247914],
    [0.00000000004, 0.55431861992, 51109.31080595839],
    [0.00000000005, 5.09435624125, 54087.0057663656],
    [0.00000000005, 5.66823169637, 1795.258443721],
    [0.00000000004, 2.1937935327, 64741.95798313119],
    [0.00000000004, 3.44065062897, 51123.53789995999],
    [0.00000000004, 5.18678479708, 48835.19385644859],
    [0.00000000004, 1.78187039205, 107679.74822257696],
    [0.00000000004, 0.78778915215, 77154.33087262919],
    [0.00000000004, 3.30678561069, 55618.3812281138],
    [0.00000000004, 3.51563071546, 1223.81784077861],
];

const P1: &[Term] = &[
    [0.00127633657, PI, 0.0],
    [0.00000000979, 0.42387819908, 1059.3819301892],
    [0.00000000797, 4.0084667742, 1109.3785520934],
    [0.0000000068, 2.12116700179, 529.6909650946],
    [0.00000000289, 2.80300275783, 7.1135470008],
    [0.00000000232, 5.10388868624, 213.299095438],
    [0.00000000217, 5.22298493086, 1589.0728952838],
    [0.00000000172, 0.11347101637, 5661.3320491522],
    [0.00000000189, 5.05531571786, 6283.0758499914],
    [0.00000000146, 1.10223713959, 4551.9534970588],
    [0.0000000014, 1.72074792264, 26087.9031415742],
    [0.00000000157, 1.8927189782, 426.598190876],
    [0.00000000101, 2.51161890874, 12566.1516999828],
    [0.00000000123, 0.40950635507, 955.5997416086],
    [0.00000000095, 3.36462302089, 7238.6755916],
    [0.0000000009, 1.71903646014, 3442.5749449654],
    [0.00000000085, 0.79105996314, 1052.2683831884],
    [0.00000000083, 0.13215020999, 6770.7106012456],
    [0.0000000008, 0.60556456257, 13521.7514415914],
    [0.00000000071, 0.27096825237, 1066.49547719],
    [0.00000000077, 2.89903510971, 639.897286314],
    [0.00000000063, 3.87222932017, 2218.7571041868],
    [0.00000000069, 2.60909424196, 11322.6640983044],
    [0.00000000064, 0.1621391141, 14765.2390432698],
    [0.00000000068, 4.13970126032, 9103.9069941176],
    [0.00000000074, 4.18290172558, 19804.8272915828],
    [0.00000000054, 5.32983022167, 15874.6175953632],
    [0.00000000056, 1.10053176461, 21535.9496445154],
    [0.0000000005, 1.31675765436, 20426.571092422],
    [0.00000000048, 2.32515791091, 52175.8062831484],
    [0.00000000044, 4.53863164032, 10213.285546211],
    [0.00000000045, 5.06538436649, 16983.9961474566],
    [0.00000000034, 0.23486235942, 39609.6545831656],
    [0.00000000039, 5.66040637238, 2118.7638603784],
    [0.00000000028, 1.13449469108, 30639.856638633],
    [0.00000000023, 4.20437190852, 433.7117378768],
    [0.00000000023, 5.15969786846, 32370.9789915656],
    [0.00000000023, 2.33030223013, 36301.18868778519],
    [0.00000000027, 2.22974799076, 37410.5672398786],
    [0.00000000021, 2.59496536421, 12432.0426503978],
    [0.00000000026, 3.99369413788, 41962.5207369374],
    [0.00000000027, 3.61723490676, 27197.2816936676],
    [0.00000000024, 0.73132277287, 31749.2351907264],
    [0.00000000018, 2.06188441784, 51116.4243529592],
    [0.00000000019, 1.2782618202, 22645.32819660879],
    [0.00000000023, 5.25253201351, 24978.5245894808],
    [0.00000000019, 4.1707869013, 45892.73043315699],
    [0.00000000022, 5.2056363951, 57837.1383323006],
    [0.00000000017, 2.77754551735, 25028.521211385],
    [0.00000000021, 4.81353586404, 419.4846438752],
    [0.00000000018, 6.17290994883, 32858.61374281979],
    [0.00000000015, 2.87649200314, 19317.1925403286],
    [0.00000000016, 3.3073972978, 33326.5787331742],
    [0.00000000014, 2.14591992069, 46514.4742339962],
    [0.00000000012, 4.49186445266, 68050.42387851159],
    [0.00000000015, 4.68029893677, 43071.8992890308],
    [0.00000000012, 0.92028381353, 1596.1864422846],
    [0.00000000012, 6.0873784403, 27043.5028831828],
    [0.00000000012, 0.00706205953, 25558.2121764796],
    [0.00000000014, 3.31587956478, 53285.1848352418],
    [0.00000000013, 0.14188465329, 73711.75592766379],
    [0.00000000011, 2.20431686729, 853.196381752],
    [0.0000000001, 0.44922788165, 13655.8604911764],
    [0.00000000012, 3.63027156571, 536.8045120954],
    [0.0000000001, 0.62336678653, 1581.959348283],
    [0.00000000009, 2.70223777373, 522.5774180938],
    [0.0000000001, 2.89039874818, 59414.4818747484],
    [0.0000000001, 5.24707639078, 206.1855484372],
    [0.00000000012, 0.11002384239, 40853.142184844],
    [0.00000000009, 1.16182502217, 47623.8527860896],
    [0.00000000009, 2.41292519307, 38519.945791972],
    [0.00000000009, 0.99345211866, 48733.23133818299],
    [0.0000000001, 1.82362834511, 2333.196392872],
    [0.00000000009, 5.55790642483, 18849.2275499742],
    [0.00000000008, 3.64629239658, 632.7837393132],
    [0.00000000008, 3.75704798626, 28306.66024576099],
    [0.00000000009, 5.7903766553, 58946.51688439399],
    [0.00000000007, 4.04881799128, 35191.8101356918],
    [0.00000000007, 4.28355201924, 7994.5284420242],
    [0.00000000007, 0.05209483539, 7880.08915333899],
    [0.00000000006, 5.05793689694, 18093.37469954999],
    [0.00000000006, 4.07221234528, 149.5631971346],
    [0.00000000008, 4.40736403307, 69159.80243060499],
    [0.00000000006, 4.34671887236, 71980.63357473118],
    [0.00000000007, 1.37306681801, 89586.37352302698],
    [0.00000000006, 5.00882536992, 77204.32749453338],
    [0.00000000005, 3.41504969754, 62389.09182935939],
    [0.00000000005, 1.29987401546, 103.0927742186],
    [0.00000000006, 0.04017044467, 51646.11531805379],
    [0.00000000005, 2.11487560702, 64607.84893354619],
    [0.00000000005, 3.55266926253, 54394.56338733519],
    [0.00000000006, 4.20883436284, 24498.8302462904],
    [0.00000000005, 0.63580279946, 74821.13447975718],
    [0.00000000005, 3.89583979337, 76.2660712756],
    [0.00000000006, 1.27766127832, 56727.7597802072],
    [0.00000000004, 5.78644572085, 83925.0414738748],
    [0.00000000006, 1.71501614846, 63498.47038145279],
    [0.00000000004, 1.23576531241, 65697.55772473979],
    [0.00000000004, 1.63756131649, 29530.4780865396],
    [0.00000000005, 5.73716392412, 5327.4761083828],
    [0.00000000004, 4.91916699579, 44181.27784112419],
    [0.00000000004, 3.42140990553, 647.0108333148],
    [0.00000000005, 5.98504302157, 53131.406024757],
    [0.00000000004, 2.63418497115, 79373.087976816],
    [0.00000000004, 5.2320651773, 51066.427731055],
    [0.00000000004, 5.5011780936, 85034.42002596818],
];

const P2: &[Term] = &[
    [0.0000091335, PI, 0.0],
    [0.00000000028, 4.75017710758, 1109.3785520934],
    [0.00000000024, 0.12982469259, 529.6909650946],
    [0.00000000026, 1.31115591186, 1059.3819301892],
    [0.00000000017, 1.39534460608, 4551.9534970588],
    [0.00000000014, 0.67408457533, 5661.3320491522],
    [0.00000000009, 3.14064253108, 213.299095438],
    [0.00000000007, 3.98411961014, 426.598190876],
    [0.00000000006, 3.8425680937, 10213.285546211],
    [0.00000000006, 3.46145131723, 1589.0728952838],
    [0.00000000005, 2.77824145697, 11322.6640983044],
    [0.00000000005, 2.96710637555, 20426.571092422],
    [0.00000000004, 1.68602074393, 639.897286314],
];

const P3: &[Term] = &[
    [0.00000018993, 0.0, 0.0],
];

const P4: &[Term] = &[
    [0.0000000064, PI, 0.0],
];

pub static MERCURY: EllipticTable = EllipticTable {
    series: [
        &[A0, A1, A2],
        &[L0, L1, L2, L3],
        &[K0, K1, K2, K3, K4, K5],
        &[H0, H1, H2, H3, H4, H5],
        &[Q0, Q1, Q2, Q3, Q4, Q5],
        &[P0, P1, P2, P3, P4],
    ],
};
